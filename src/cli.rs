use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about = "A keyword-routed chat assistant with a browser and terminal front end", long_about = None)]
pub struct Args {
    /// Message to send in one-shot mode (stdin is used when piped)
    pub query: Option<String>,

    /// Run the HTTP server with the browser chat page
    #[arg(short, long, conflicts_with = "chat")]
    pub serve: bool,

    /// Start an interactive chat session in the terminal
    #[arg(short, long)]
    pub chat: bool,

    /// Answer in-process instead of posting to a server
    #[arg(short, long)]
    pub local: bool,

    /// Address for --serve to listen on (overrides config)
    #[arg(long)]
    pub bind: Option<String>,

    /// Chat endpoint URL for clients (overrides config)
    #[arg(long)]
    pub url: Option<String>,

    /// Fallback reply selection: random or hashed (overrides config)
    #[arg(long)]
    pub fallback: Option<String>,

    /// Enable verbose debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_serve_flags() {
        let args = Args::parse_from(["agentchat", "--serve", "--bind", "0.0.0.0:8080"]);
        assert!(args.serve);
        assert_eq!(args.bind.as_deref(), Some("0.0.0.0:8080"));
    }

    #[test]
    fn parses_one_shot_query() {
        let args = Args::parse_from(["agentchat", "--local", "what is 2+2"]);
        assert!(args.local);
        assert_eq!(args.query.as_deref(), Some("what is 2+2"));
    }

    #[test]
    fn serve_and_chat_conflict() {
        assert!(Args::try_parse_from(["agentchat", "--serve", "--chat"]).is_err());
    }
}
