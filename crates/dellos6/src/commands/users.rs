//! Local user accounts.

use tabled::Tabled;

use dellos6_core::User;

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

use super::SwitchDriver;

#[derive(Tabled)]
struct UserRow {
    #[tabled(rename = "User")]
    name: String,
    #[tabled(rename = "Level")]
    level: u8,
    #[tabled(rename = "Password")]
    password: &'static str,
    #[tabled(rename = "SSH keys")]
    keys: usize,
}

impl UserRow {
    fn new(name: &str, u: &User) -> Self {
        Self {
            name: name.to_owned(),
            level: u.level,
            password: if u.password.is_empty() { "-" } else { "set" },
            keys: u.sshkeys.len(),
        }
    }
}

pub async fn handle(driver: &mut SwitchDriver, global: &GlobalOpts) -> Result<(), CliError> {
    let users = driver.get_users().await?;
    let out = output::render_map(&global.output, &users, |name, u| UserRow::new(name, u))?;
    output::print_output(&out, global.quiet);
    Ok(())
}
