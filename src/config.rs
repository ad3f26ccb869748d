use clap::Parser;

// CLI argument structure
#[derive(Parser, Debug, Clone)]
#[command(name = "copywriter-gateway")]
#[command(about = "Copywriting gateway for the OpenAI completion API")]
pub struct Args {
    // Port to run the server on
    #[arg(short, long, default_value_t = 8080)]
    pub port: u16,

    // OpenAI base url (overridable for staging/tests)
    #[arg(short, long, default_value = "https://api.openai.com")]
    pub openai_url: String,

    // Provider API key, supplied by the environment
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub api_key: String,
}
