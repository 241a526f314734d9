use crate::session::{Panel, Session};

/// Print the command list for the active panel, the way the page this
/// client replaces showed either the login/register forms or the banking
/// operations.
pub fn execute(session: &Session) -> Result<(), String> {
    let banking = session.panel() == Panel::Banking;

    if banking {
        println!("Banking operations:");
    } else {
        println!("Log in or register first:");
    }

    for spec in super::COMMANDS.iter() {
        if spec.authenticated != banking {
            continue;
        }
        let aliases = if spec.aliases.is_empty() {
            String::new()
        } else {
            format!(" (alias: {})", spec.aliases.join(", "))
        };
        println!("  {:<32} {}{}", spec.usage, spec.summary, aliases);
    }

    println!("  {:<32} Show this list", "help");
    println!("  {:<32} Leave the client", "quit");

    Ok(())
}
