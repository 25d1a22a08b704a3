//! Interactive command handler
//!
//! Walks the user through three numbered menus (degree, grade, postgraduate
//! level) and shows the result card after each pass.

use super::score::{self, ScoreRequest};
use cooked_calculator::catalog::Catalog;
use cooked_calculator::config::Config;
use cooked_calculator::error;
use cooked_calculator::models::{Grade, PostGrad, Selection};
use cooked_calculator::report::{ReportFormat, ScoreResult};
use std::io::{self, BufRead, IsTerminal, Write};

/// Run the interactive session on stdin/stdout
pub fn run(catalog: &Catalog, config: &Config) {
    if catalog.is_empty() {
        eprintln!("✗ No degrees available. Check the catalog path with `cooked config get catalog`.");
        return;
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    loop {
        let selection = match select(
            catalog,
            config.default_grade(),
            config.default_post_grad(),
            &mut input,
            &mut output,
        ) {
            Ok(Some(selection)) => selection,
            Ok(None) => return,
            Err(e) => {
                error!("Failed to read selection: {e}");
                return;
            }
        };

        let degree = selection.resolve(catalog);
        let result =
            ScoreResult::compute(degree, selection.grade, selection.post_grad, &config.share.url);
        if result.has_degree() {
            score::dramatic_pause(config);
        }

        println!();
        let request = ScoreRequest {
            subject: selection.subject.clone().unwrap_or_default(),
            grade: selection.grade,
            post_grad: selection.post_grad,
            format: ReportFormat::Text,
            output: None,
            share: true,
            share_file: None,
            breakdown: cooked_calculator::logger::is_verbose_enabled(),
            dramatic: false,
            color: io::stdout().is_terminal(),
        };
        score::present(&result, &request, config, &mut output, &mut io::stderr());

        match confirm("\nScore another degree?", &mut input, &mut output) {
            Ok(true) => println!(),
            _ => return,
        }
    }
}

/// Prompt for a full selection.
///
/// Returns `Ok(None)` when input ends or the user types `q`.
///
/// # Errors
/// Returns an error if reading or writing fails
pub fn select<R: BufRead, W: Write>(
    catalog: &Catalog,
    default_grade: Grade,
    default_post_grad: PostGrad,
    input: &mut R,
    output: &mut W,
) -> io::Result<Option<Selection>> {
    let subjects: Vec<&str> = catalog.subjects().collect();

    writeln!(output, "Select your degree:")?;
    for (i, subject) in subjects.iter().enumerate() {
        writeln!(output, "  {:>2}. {subject}", i + 1)?;
    }

    let subject = loop {
        let Some(line) = prompt(output, input, "Degree (number or name, q to quit): ")? else {
            return Ok(None);
        };
        if is_quit(&line) {
            return Ok(None);
        }
        if let Some(index) = parse_choice(&line, subjects.len()) {
            break subjects[index].to_string();
        }
        if let Some(degree) = catalog.find_fuzzy(line.trim()) {
            break degree.subject.clone();
        }
        writeln!(output, "✗ '{}' is not a degree in the list", line.trim())?;
    };

    let labels: Vec<&str> = Grade::ALL.iter().map(|g| g.display_name()).collect();
    let Some(grade_index) = menu(
        "Grade achieved:",
        &labels,
        Grade::ALL.iter().position(|g| *g == default_grade),
        input,
        output,
    )?
    else {
        return Ok(None);
    };

    let labels: Vec<&str> = PostGrad::ALL.iter().map(|p| p.label()).collect();
    let Some(post_grad_index) = menu(
        "Post-grad:",
        &labels,
        PostGrad::ALL.iter().position(|p| *p == default_post_grad),
        input,
        output,
    )?
    else {
        return Ok(None);
    };

    Ok(Some(Selection::new(
        subject,
        Grade::ALL[grade_index],
        PostGrad::ALL[post_grad_index],
    )))
}

/// Show a numbered menu and read a choice; an empty line picks `default`
fn menu<R: BufRead, W: Write>(
    title: &str,
    options: &[&str],
    default: Option<usize>,
    input: &mut R,
    output: &mut W,
) -> io::Result<Option<usize>> {
    writeln!(output, "{title}")?;
    for (i, option) in options.iter().enumerate() {
        let marker = if Some(i) == default { " (default)" } else { "" };
        writeln!(output, "  {}. {option}{marker}", i + 1)?;
    }

    loop {
        let Some(line) = prompt(output, input, "Choice: ")? else {
            return Ok(None);
        };
        if is_quit(&line) {
            return Ok(None);
        }
        if line.trim().is_empty() {
            if let Some(d) = default {
                return Ok(Some(d));
            }
        }
        if let Some(index) = parse_choice(&line, options.len()) {
            return Ok(Some(index));
        }
        if let Some(index) = options
            .iter()
            .position(|o| o.eq_ignore_ascii_case(line.trim()))
        {
            return Ok(Some(index));
        }
        writeln!(output, "✗ Pick a number from 1 to {}", options.len())?;
    }
}

/// Yes/no question; anything but y/yes is no
pub(super) fn confirm<R: BufRead, W: Write + ?Sized>(
    question: &str,
    input: &mut R,
    output: &mut W,
) -> io::Result<bool> {
    let answer = prompt(output, input, &format!("{question} (y/n): "))?.unwrap_or_default();
    let answer = answer.trim();
    Ok(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"))
}

/// Print `text` and read one line; `None` at end of input
fn prompt<R: BufRead, W: Write + ?Sized>(
    output: &mut W,
    input: &mut R,
    text: &str,
) -> io::Result<Option<String>> {
    write!(output, "{text}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

/// 1-based menu number to a 0-based index
fn parse_choice(line: &str, len: usize) -> Option<usize> {
    line.trim()
        .parse::<usize>()
        .ok()
        .filter(|n| (1..=len).contains(n))
        .map(|n| n - 1)
}

fn is_quit(line: &str) -> bool {
    matches!(line.trim(), "q" | "Q" | "quit" | "exit")
}

#[cfg(test)]
mod tests {
    use super::*;
    use cooked_calculator::models::DegreeRecord;
    use std::io::Cursor;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            DegreeRecord::new("Computer Science", 0.85, 0.88, 30.0, 0.6),
            DegreeRecord::new("Law", 0.7, 0.78, 24.0, 0.8),
            DegreeRecord::new("Nursing", 0.15, 0.97, 28.0, 0.3),
        ])
    }

    fn run_select(script: &str) -> (Option<Selection>, String) {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        let selection = select(
            &catalog(),
            Grade::UpperSecond,
            PostGrad::None,
            &mut input,
            &mut output,
        )
        .unwrap();
        (selection, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_parse_choice() {
        assert_eq!(parse_choice("1\n", 3), Some(0));
        assert_eq!(parse_choice(" 3 ", 3), Some(2));
        assert_eq!(parse_choice("0", 3), None);
        assert_eq!(parse_choice("4", 3), None);
        assert_eq!(parse_choice("law", 3), None);
    }

    #[test]
    fn test_select_by_numbers() {
        let (selection, menu_text) = run_select("2\n3\n3\n");
        let selection = selection.unwrap();

        assert_eq!(selection.subject.as_deref(), Some("Law"));
        assert_eq!(selection.grade, Grade::LowerSecond);
        assert_eq!(selection.post_grad, PostGrad::PhD);
        assert!(menu_text.contains("   1. Computer Science"));
        assert!(menu_text.contains("2. 2:1 (Upper Second) (default)"));
    }

    #[test]
    fn test_select_defaults_on_empty_lines() {
        let (selection, _) = run_select("nurs\n\n\n");
        let selection = selection.unwrap();

        assert_eq!(selection.subject.as_deref(), Some("Nursing"));
        assert_eq!(selection.grade, Grade::UpperSecond);
        assert_eq!(selection.post_grad, PostGrad::None);
    }

    #[test]
    fn test_select_retries_bad_input() {
        let (selection, text) = run_select("Astrology\n9\n1\nfirst class\nmasters\n");
        let selection = selection.unwrap();

        assert!(text.contains("'Astrology' is not a degree in the list"));
        assert!(text.contains("✗ '9' is not a degree in the list"));
        assert_eq!(selection.subject.as_deref(), Some("Computer Science"));
        assert_eq!(selection.grade, Grade::First);
        assert_eq!(selection.post_grad, PostGrad::Masters);
    }

    #[test]
    fn test_select_quit_and_eof() {
        assert_eq!(run_select("q\n").0, None);
        assert_eq!(run_select("1\n").0, None);
        assert_eq!(run_select("").0, None);
    }

    #[test]
    fn test_confirm() {
        let mut out = Vec::new();
        assert!(confirm("Again?", &mut Cursor::new(b"yes\n".to_vec()), &mut out).unwrap());
        assert!(!confirm("Again?", &mut Cursor::new(b"n\n".to_vec()), &mut out).unwrap());
        assert!(!confirm("Again?", &mut Cursor::new(Vec::new()), &mut out).unwrap());
    }
}
