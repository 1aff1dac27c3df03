use crate::chat::{Message, Role};
use crate::utils::text::{display_width, wrap_text};
use console::{Term, style};
use termimad::MadSkin;

fn box_width(max: usize) -> usize {
    let terminal_width = Term::stdout().size().1 as usize;
    std::cmp::min(terminal_width.saturating_sub(4), max).max(40)
}

/// Whether a reply reads better through the markdown renderer.
pub fn looks_like_markdown(text: &str) -> bool {
    text.contains("```") || text.contains("**") || text.contains('`') || text.contains('#')
}

fn header(message: &Message) -> String {
    let time = message.timestamp.format("%H:%M:%S").to_string();
    let label = match message.role {
        Role::User => style(format!("👤 {}", message.role.label())).bold().cyan(),
        Role::Assistant => style(format!("🤖 {}", message.role.label())).bold().blue(),
        Role::System => style(format!("⚙️  {}", message.role.label())).bold().magenta(),
    };
    format!("{} {}", label, style(time).dim())
}

/// Prints one transcript entry with its role and local time.
pub fn display_message(message: &Message) {
    println!("\n{}", header(message));
    match message.role {
        Role::User => println!("{}", style(&message.content).white()),
        _ if looks_like_markdown(&message.content) => display_markdown(&message.content),
        _ => display_response(&message.content),
    }
}

/// Display a reply in a formatted box
pub fn display_response(response: &str) {
    let max_width = box_width(120);
    let inner = max_width.saturating_sub(4);

    let mut wrapped_lines = Vec::new();
    for line in response.lines() {
        if line.is_empty() {
            wrapped_lines.push(String::new());
        } else {
            wrapped_lines.extend(wrap_text(line, inner));
        }
    }

    let content_max_len = wrapped_lines
        .iter()
        .map(|line| display_width(line))
        .max()
        .unwrap_or(0);
    let width = std::cmp::min(max_width, content_max_len + 4);

    let top_border = "┌".to_string() + &"─".repeat(width - 2) + "┐";
    let bottom_border = "└".to_string() + &"─".repeat(width - 2) + "┘";

    println!("{}", style(&top_border).dim().blue());
    for line in wrapped_lines {
        let padding = width.saturating_sub(display_width(&line) + 3);
        println!("│ {}{}│", style(&line).white(), " ".repeat(padding));
    }
    println!("{}", style(&bottom_border).dim().blue());
}

pub fn display_markdown(text: &str) {
    let skin = MadSkin::default();
    skin.print_text(text);
}

/// Shown while a request is in flight.
pub fn display_thinking() {
    let _ = Term::stdout().write_line(&style("🤖 thinking...").dim().italic().to_string());
}

pub fn clear_thinking() {
    let _ = Term::stdout().clear_last_lines(1);
}

pub fn display_error(message: &str) {
    eprintln!("{} {}", style("✗").bold().red(), style(message).red());
}

const ENDPOINTS: [(&str, &str); 3] = [
    ("POST /api/chat", "reply to a conversation"),
    ("GET  /api/capabilities", "capability descriptors"),
    ("GET  /health", "health check"),
];

/// Startup banner for `--serve`.
pub fn display_server_banner(address: &str) {
    let width = box_width(64);
    let rule = "─".repeat(width);

    println!();
    println!("{}", style(&rule).dim().magenta());
    println!("{}", style("🤖 AI AGENT ASSISTANT").bold().magenta());
    println!("{}", style(&rule).dim().magenta());
    println!("🌐 Chat page");
    println!("   └─ http://{}/", address);
    println!("🔗 HTTP Endpoints");
    for (i, (route, purpose)) in ENDPOINTS.iter().enumerate() {
        let branch = if i + 1 == ENDPOINTS.len() { "└─" } else { "├─" };
        println!("   {} {:<23} - {}", branch, route, purpose);
    }
    println!("{}", style(&rule).dim());
    println!("Press Ctrl+C to stop the server");
    println!();
}
