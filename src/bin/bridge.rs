use log::debug;
use sign_core::{LetterList, SignPlanner};
use std::io::{self, BufRead, Write};

// Line-protocol bridge for an external view process. The view owns the two
// text inputs and sends the full text after every edit; we answer with one
// SHOW_SECTION/HIDE_SECTION line per section so it can render or suppress
// each one.
//
// Commands on stdin:
//   OLD <text>   replace the old-sign text
//   NEW <text>   replace the new-sign text
//   EXIT         shut down

fn main() -> io::Result<()> {
    env_logger::init();
    debug!("sign bridge starting");

    let planner = SignPlanner::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut old_sign = String::new();
    let mut new_sign = String::new();

    for line in stdin.lock().lines() {
        let input = line?;
        debug!("bridge <- {:?}", input);
        let (command, rest) = match input.split_once(' ') {
            Some((command, rest)) => (command, rest),
            None => (input.as_str(), ""),
        };

        match command {
            "OLD" => {
                old_sign = rest.to_string();
                update_view(&planner, &old_sign, &new_sign, &mut stdout)?;
            }
            "NEW" => {
                new_sign = rest.to_string();
                update_view(&planner, &old_sign, &new_sign, &mut stdout)?;
            }
            "EXIT" => break,
            _ => debug!("bridge: unknown command {:?}", command),
        }
    }

    debug!("sign bridge shutting down");
    Ok(())
}

fn update_view(
    planner: &SignPlanner,
    old_sign: &str,
    new_sign: &str,
    stdout: &mut io::Stdout,
) -> io::Result<()> {
    let plan = planner.plan(old_sign, new_sign);
    write_section(stdout, "grab", &plan.grab)?;
    write_section(stdout, "keep", &plan.keep)?;
    write_section(stdout, "take", &plan.take)?;
    stdout.flush()
}

fn write_section(stdout: &mut io::Stdout, name: &str, letters: &LetterList) -> io::Result<()> {
    if letters.is_empty() {
        writeln!(stdout, "HIDE_SECTION {}", name)
    } else {
        let payload = serde_json::to_string(letters)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
        writeln!(stdout, "SHOW_SECTION {} {}", name, payload)
    }
}
