use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{self, Clear, ClearType},
};
use sign_core::{LetterList, SignPlan, SignPlanner};
use std::io::{self, Stdout, Write};

/// Which of the two sign inputs currently receives keystrokes.
#[derive(Clone, Copy, PartialEq)]
enum Field {
    Old,
    New,
}

fn main() -> io::Result<()> {
    env_logger::init();

    let planner = SignPlanner::new();
    let mut old_sign = String::new();
    let mut new_sign = String::new();
    let mut active = Field::Old;

    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, Hide)?;

    loop {
        // Re-plan from scratch on every edit; the pipeline is cheap enough
        // that no caching or diffing is needed.
        let plan = planner.plan(&old_sign, &new_sign);
        print_ui(&mut stdout, &old_sign, &new_sign, active, &plan)?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let field = match active {
                    Field::Old => &mut old_sign,
                    Field::New => &mut new_sign,
                };
                match key.code {
                    KeyCode::Esc => break,
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => break,
                    KeyCode::Tab | KeyCode::Up | KeyCode::Down => {
                        active = match active {
                            Field::Old => Field::New,
                            Field::New => Field::Old,
                        };
                    }
                    KeyCode::Backspace => {
                        field.pop();
                    }
                    KeyCode::Char(c) => field.push(c),
                    _ => {}
                }
            }
            _ => {}
        }
    }

    execute!(stdout, Show, ResetColor, Clear(ClearType::All), MoveTo(0, 0))?;
    terminal::disable_raw_mode()?;
    Ok(())
}

fn print_ui(
    stdout: &mut Stdout,
    old_sign: &str,
    new_sign: &str,
    active: Field,
    plan: &SignPlan,
) -> io::Result<()> {
    queue!(
        stdout,
        Clear(ClearType::All),
        MoveTo(0, 0),
        SetAttribute(Attribute::Bold),
        Print("Church Sign Maker"),
        SetAttribute(Attribute::Reset),
    )?;

    let mut row = 2;
    row = print_input(stdout, row, "Old Sign", old_sign, active == Field::Old)?;
    row = print_input(stdout, row, "New Sign", new_sign, active == Field::New)?;
    row += 1;

    if plan.is_empty() {
        queue!(
            stdout,
            MoveTo(0, row),
            SetForegroundColor(Color::DarkGrey),
            Print("Type the old and new sign text to see which letters to move."),
            ResetColor,
        )?;
        row += 1;
    } else {
        row = print_section(stdout, row, "Grab New Letters", Color::Green, &plan.grab)?;
        row = print_section(stdout, row, "Keep Letters", Color::Yellow, &plan.keep)?;
        row = print_section(stdout, row, "Take Back Letters", Color::Red, &plan.take)?;
    }

    queue!(
        stdout,
        MoveTo(0, row + 1),
        SetForegroundColor(Color::DarkGrey),
        Print("[Tab] switch sign  [Backspace] delete  [Esc] quit"),
        ResetColor,
    )?;
    stdout.flush()
}

fn print_input(
    stdout: &mut Stdout,
    row: u16,
    placeholder: &str,
    text: &str,
    active: bool,
) -> io::Result<u16> {
    let marker = if active { '>' } else { ' ' };
    queue!(stdout, MoveTo(0, row), Print(format!("{} {}: ", marker, placeholder)))?;
    if active {
        queue!(
            stdout,
            SetAttribute(Attribute::Bold),
            Print(text),
            Print("_"),
            SetAttribute(Attribute::Reset),
        )?;
    } else {
        queue!(stdout, Print(text))?;
    }
    Ok(row + 1)
}

/// Draws one letter section; a section with no letters is skipped entirely.
fn print_section(
    stdout: &mut Stdout,
    row: u16,
    title: &str,
    color: Color,
    letters: &LetterList,
) -> io::Result<u16> {
    if letters.is_empty() {
        return Ok(row);
    }
    let mut row = row;
    queue!(stdout, MoveTo(0, row), SetForegroundColor(color), Print(title), ResetColor)?;
    row += 1;
    for entry in letters {
        queue!(
            stdout,
            MoveTo(0, row),
            Print(format!("  {} × {}", entry.letter, entry.count)),
        )?;
        row += 1;
    }
    Ok(row + 1)
}
