use crate::error::GenerateError;
use crate::models::GenerateRequest;

// One template per supported objective. Some templates carry a trailing
// colon after the intro sentence; `colon_after_intro` preserves that.
struct Template {
    opener: &'static str,
    colon_after_intro: bool,
}

const TEMPLATES: &[(&str, Template)] = &[
    (
        "Audiobook",
        Template {
            opener: "Write a creative audio book",
            colon_after_intro: false,
        },
    ),
    (
        "Long Video Sales Script",
        Template {
            opener: "Write a long video sales script",
            colon_after_intro: false,
        },
    ),
    (
        "Facebook Video Ads Script",
        Template {
            opener: "Write a creative Facebook video ads script to run on Facebook",
            colon_after_intro: true,
        },
    ),
    (
        "Instagram Video Ads Script",
        Template {
            opener: "Write a creative Instagram video ads script to run on Instagram",
            colon_after_intro: true,
        },
    ),
    (
        "YouTube Video Ads Script",
        Template {
            opener: "Write a creative YouTube video ads script to run on YouTube",
            colon_after_intro: true,
        },
    ),
    (
        "TV Commercials",
        Template {
            opener: "Write a creative TV commercial",
            colon_after_intro: true,
        },
    ),
    (
        "Radio Advert",
        Template {
            opener: "Write a creative Radio advert script",
            colon_after_intro: false,
        },
    ),
    (
        "Podcast",
        Template {
            opener: "Write a creative Podcast script",
            colon_after_intro: false,
        },
    ),
    (
        "Tiktok Video Ads Script",
        Template {
            opener: "Write a creative Tiktok video ads script to run on Tiktok",
            colon_after_intro: true,
        },
    ),
];

fn template_for(objective: &str) -> Option<&'static Template> {
    TEMPLATES
        .iter()
        .find(|(name, _)| *name == objective)
        .map(|(_, template)| template)
}

// Creativity label -> sampling temperature. Unrecognized labels silently
// map to 0.0.
pub fn creativity_to_temperature(creativity: &str) -> f64 {
    match creativity {
        "optimal" => 0.7,
        "low" => 0.2,
        "medium" => 0.5,
        "high" => 0.9,
        "max" => 1.0,
        _ => 0.0,
    }
}

// Build the completion prompt for a request. Unknown objectives have no
// template and fail here.
pub fn build_prompt(req: &GenerateRequest) -> Result<String, GenerateError> {
    let template = template_for(&req.objective)
        .ok_or_else(|| GenerateError::UnsupportedObjective(req.objective.clone()))?;

    let translate = if req.language != "english" {
        format!(" Translate the result to {}.", req.language)
    } else {
        String::new()
    };
    let colon = if template.colon_after_intro { ":" } else { "" };

    Ok(format!(
        "{} using a {} tone. Use the following key points.{}{}\n\nKey points: {}",
        template.opener, req.tone, translate, colon, req.keywords
    ))
}
