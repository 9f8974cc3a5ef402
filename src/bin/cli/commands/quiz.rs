use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use chrono::Utc;

use cardforge::quiz::{
    build_choices, grade, select_cards, DifficultyTier, QuizAttempt, QuizConfig, QuizScope,
    ValidationError,
};

use crate::app::App;
use crate::OutputFormat;

pub fn run(
    app: &App,
    tier: DifficultyTier,
    include_all: bool,
    limit: Option<usize>,
    choices: bool,
    format: &OutputFormat,
) -> Result<()> {
    let cards = app.store.list_cards().context("Failed to list cards")?;
    let today = Utc::now().date_naive();

    let config = QuizConfig {
        tier,
        scope: if include_all {
            QuizScope::All
        } else {
            QuizScope::Due
        },
        limit: limit.unwrap_or(app.settings.quiz_limit),
    };

    let mut rng = rand::thread_rng();
    let quiz_cards = select_cards(&cards, &config, today, &mut rng);

    if quiz_cards.is_empty() {
        println!("No flashcards match the quiz settings. Try --all or a different --tier.");
        return Ok(());
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let total = quiz_cards.len();
    let mut attempts: Vec<QuizAttempt> = Vec::with_capacity(total);

    for (i, card) in quiz_cards.iter().enumerate() {
        println!("\nQuestion {} of {} (level {})", i + 1, total, card.difficulty);
        println!("{}", card.prompt);

        let options = if choices {
            let options = build_choices(card, &quiz_cards, &mut rng);
            for (n, option) in options.iter().enumerate() {
                println!("  {}) {}", n + 1, option);
            }
            options
        } else {
            Vec::new()
        };

        let attempt = loop {
            print!("> ");
            io::stdout().flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                // stdin closed mid-quiz
                println!();
                return finish(&attempts, total, format);
            }

            // In choice mode an option number stands in for its text
            let answer =
                resolve_choice(&line, &options).unwrap_or_else(|| line.trim().to_string());

            match grade(card, &answer) {
                Ok(attempt) => break attempt,
                Err(ValidationError::EmptyAnswer) => {
                    println!("Please type an answer.");
                }
                Err(e) => return Err(e.into()),
            }
        };

        if attempt.correct {
            println!("Correct.");
        } else {
            println!("Incorrect. The answer was: {}", card.masked_term);
        }

        app.record_attempt(card, &attempt)?;
        attempts.push(attempt);
    }

    finish(&attempts, total, format)
}

/// Map "2" to the second option when multiple choices are on screen
fn resolve_choice(line: &str, options: &[String]) -> Option<String> {
    if options.is_empty() {
        return None;
    }
    let n: usize = line.trim().parse().ok()?;
    options.get(n.checked_sub(1)?).cloned()
}

fn finish(attempts: &[QuizAttempt], total: usize, format: &OutputFormat) -> Result<()> {
    let score = attempts.iter().filter(|a| a.correct).count();
    let answered = attempts.len();
    let accuracy = if answered == 0 {
        0.0
    } else {
        score as f64 / answered as f64 * 100.0
    };

    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({
                    "score": score,
                    "answered": answered,
                    "total": total,
                    "accuracy": accuracy,
                    "attempts": attempts,
                }))?
            );
        }
        OutputFormat::Plain => {
            if answered == 0 {
                println!("Quiz aborted before any answers.");
                return Ok(());
            }

            println!("\nQuiz complete.");
            println!("Score: {}/{} ({:.1}%)", score, answered, accuracy);

            if accuracy >= 80.0 {
                println!("Excellent!");
            } else if accuracy >= 60.0 {
                println!("Good job!");
            } else {
                println!("Keep practicing!");
            }
        }
    }

    Ok(())
}
