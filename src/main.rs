mod config;
mod quiz;

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

use dotenv::dotenv;
use log::{debug, info, warn};
use quiz::bank::QuestionBank;
use quiz::review::OptionMark;
use quiz::session::{QuizSession, QuizState};

type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

const PROMPT_TEXT: &str = "Pick an option (letter or number), [n]ext, [r]estart or [q]uit";
const FINISHED_PROMPT_TEXT: &str = "[r]estart the quiz or [q]uit";
const HELP_TEXT: &str = "Unknown command. Options are picked by letter (a, b, ...) or number (1, 2, ...); n = next, r = restart, q = quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Select(usize),
    Next,
    Restart,
    Quit,
    Unknown,
}

fn parse_command(input: &str) -> Command {
    let input = input.trim().to_lowercase();
    match input.as_str() {
        "" | "n" | "next" => Command::Next,
        "r" | "restart" => Command::Restart,
        "q" | "quit" => Command::Quit,
        _ => {
            if let Ok(number) = input.parse::<usize>() {
                return match number {
                    0 => Command::Unknown,
                    n => Command::Select(n - 1),
                };
            }
            let mut chars = input.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if c.is_ascii_lowercase() => Command::Select((c as u8 - b'a') as usize),
                _ => Command::Unknown,
            }
        }
    }
}

fn option_label(index: usize) -> char {
    if index < 26 {
        (b'a' + index as u8) as char
    } else {
        '?'
    }
}

fn mark_suffix(mark: OptionMark) -> &'static str {
    match mark {
        OptionMark::Neutral => "",
        OptionMark::Correct => "  <- correct",
        OptionMark::WrongSelection => "  <- wrong",
    }
}

fn render<W: Write>(session: &QuizSession, out: &mut W) -> HandlerResult {
    match session.state() {
        QuizState::InProgress { position } => render_question(session, position, out),
        QuizState::Finished => render_results(session, out),
    }
}

fn render_question<W: Write>(session: &QuizSession, position: usize, out: &mut W) -> HandlerResult {
    let question = session.current_question()?;
    writeln!(out)?;
    writeln!(
        out,
        "Question {}/{}: {}",
        position + 1,
        session.len(),
        question.text
    )?;
    writeln!(out, "{}", "-".repeat(40))?;

    let selected = session.selected(position);
    for (index, option) in question.options.iter().enumerate() {
        let radio = if selected == Some(index) { "(x)" } else { "( )" };
        writeln!(
            out,
            "  {} {}. {}{}",
            radio,
            option_label(index),
            option,
            mark_suffix(session.option_mark(index)?)
        )?;
    }

    writeln!(out)?;
    writeln!(out, "{}", PROMPT_TEXT)?;
    out.flush()?;
    Ok(())
}

fn render_results<W: Write>(session: &QuizSession, out: &mut W) -> HandlerResult {
    let results = session.results()?;
    writeln!(out)?;
    writeln!(out, "Quiz Complete!")?;
    writeln!(out, "{}", "=".repeat(40))?;

    for result in &results {
        writeln!(out, "Q{}: {}", result.position + 1, result.text)?;
        for (index, option) in result.options.iter().enumerate() {
            writeln!(
                out,
                "  {}. {}{}",
                option_label(index),
                option,
                mark_suffix(result.option_mark(index))
            )?;
        }
        if result.selected.is_none() {
            writeln!(out, "  (not answered)")?;
        }
        writeln!(out, "{}", "-".repeat(40))?;
    }

    writeln!(out, "Total Correct: {} / {}", session.score()?, session.len())?;
    writeln!(out, "Average: {:.2}%", session.percentage()?)?;
    writeln!(out)?;
    writeln!(out, "{}", FINISHED_PROMPT_TEXT)?;
    out.flush()?;
    Ok(())
}

fn load_bank(settings: &config::Settings) -> Result<QuestionBank, quiz::QuizError> {
    match &settings.catalog_path {
        Some(path) => {
            info!("Loading the catalog from {}", path.display());
            QuestionBank::from_reader(BufReader::new(File::open(path)?))
        }
        None => {
            info!("Loading the embedded catalog");
            QuestionBank::embedded()
        }
    }
}

fn main() -> HandlerResult {
    let env_file = dotenv();

    pretty_env_logger::init();
    info!("Starting the quiz...");
    if let Err(err) = env_file {
        debug!("No .env file loaded: {}", err);
    }

    let settings = config::Settings::from_env()?;
    if let Some(seed) = settings.seed {
        info!("Using fixed seed {}", seed);
    }

    let bank = load_bank(&settings)?;
    let mut rng = settings.rng();
    let mut session = QuizSession::new(&bank, &mut rng)?;

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    render(&session, &mut stdout)?;

    for line in stdin.lock().lines() {
        match parse_command(&line?) {
            Command::Quit => break,
            Command::Select(index) => {
                if let Err(err) = session.select_option(index) {
                    warn!("Ignoring selection: {}", err);
                }
            }
            Command::Next => {
                session.advance();
            }
            Command::Restart => session.restart(&bank, &mut rng)?,
            Command::Unknown => {
                writeln!(stdout, "{}", HELP_TEXT)?;
                continue;
            }
        }
        render(&session, &mut stdout)?;
    }

    info!("Bye!");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rendered(session: &QuizSession) -> String {
        let mut out = Vec::new();
        render(session, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_parse_command() {
        assert_eq!(parse_command("a"), Command::Select(0));
        assert_eq!(parse_command(" C "), Command::Select(2));
        assert_eq!(parse_command("4"), Command::Select(3));
        assert_eq!(parse_command(""), Command::Next);
        assert_eq!(parse_command("next"), Command::Next);
        assert_eq!(parse_command("r"), Command::Restart);
        assert_eq!(parse_command("Q"), Command::Quit);
        assert_eq!(parse_command("0"), Command::Unknown);
        assert_eq!(parse_command("hello"), Command::Unknown);
    }

    #[test]
    fn test_option_label() {
        assert_eq!(option_label(0), 'a');
        assert_eq!(option_label(5), 'f');
    }

    #[test]
    fn test_render_question_lists_every_option() {
        let bank = QuestionBank::embedded().unwrap();
        let mut session = QuizSession::new(&bank, &mut StdRng::seed_from_u64(11)).unwrap();
        let question = session.current_question().unwrap();

        let text = rendered(&session);
        assert!(text.contains("Question 1/10"));
        assert!(text.contains(&question.text));
        for option in &question.options {
            assert!(text.contains(option.as_str()));
        }
        assert!(!text.contains("<- correct"));

        session.select_option(question.correct_index).unwrap();
        let text = rendered(&session);
        assert!(text.contains("(x)"));
        assert!(text.contains("<- correct"));
    }

    #[test]
    fn test_render_results() {
        let bank = QuestionBank::embedded().unwrap();
        let mut session = QuizSession::new(&bank, &mut StdRng::seed_from_u64(11)).unwrap();
        while !session.is_finished() {
            let correct = session.current_question().unwrap().correct_index;
            session.select_option(correct).unwrap();
            session.advance();
        }

        let text = rendered(&session);
        assert!(text.contains("Quiz Complete!"));
        assert!(text.contains("Total Correct: 10 / 10"));
        assert!(text.contains("Average: 100.00%"));
    }
}
