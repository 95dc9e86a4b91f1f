// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! An interactive review session over the practice queue.

use std::io::BufRead;
use std::io::Write;

use flashdeck_core::card_store::CardStore;
use flashdeck_core::error::Fallible;
use flashdeck_core::store::DocumentStore;

#[derive(Debug, Default, PartialEq)]
pub struct DrillSummary {
    pub reviewed: usize,
    pub correct: usize,
    /// Cards still waiting in the practice queue when the session ended.
    pub remaining: usize,
}

enum Verdict {
    Correct,
    Incorrect,
    Quit,
}

/// Drill cards from the practice queue until it runs out, the limit is hit,
/// or the user quits. Failed cards go back to the end of the queue and come
/// up again in the same session.
pub fn drill<S: DocumentStore>(
    cards: &mut CardStore<S>,
    input: &mut impl BufRead,
    out: &mut impl Write,
    limit: Option<usize>,
) -> Fallible<DrillSummary> {
    let mut summary = DrillSummary::default();
    if cards.queue_size() == 0 {
        writeln!(out, "No cards to review.")?;
        return Ok(summary);
    }
    loop {
        if limit.is_some_and(|limit| summary.reviewed >= limit) {
            break;
        }
        let Some(card) = cards.dequeue_next() else {
            break;
        };
        let id = card.id();
        let answer = card.answer().to_string();
        writeln!(out, "[{}] Q: {}", card.category(), card.question())?;
        write!(out, "(press Enter to reveal) ")?;
        out.flush()?;
        if read_line(input)?.is_none() {
            break;
        }
        writeln!(out, "A: {answer}")?;

        match ask_verdict(cards, input, out)? {
            Verdict::Correct => {
                cards.mark_reviewed(id, true)?;
                summary.reviewed += 1;
                summary.correct += 1;
            }
            Verdict::Incorrect => {
                cards.mark_reviewed(id, false)?;
                summary.reviewed += 1;
            }
            Verdict::Quit => break,
        }
    }
    summary.remaining = cards.queue_size();
    writeln!(
        out,
        "Reviewed {} cards ({} correct), {} remaining.",
        summary.reviewed, summary.correct, summary.remaining
    )?;
    Ok(summary)
}

fn ask_verdict<S: DocumentStore>(
    cards: &mut CardStore<S>,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Fallible<Verdict> {
    loop {
        write!(out, "Correct? [y/n/u/q] ")?;
        out.flush()?;
        let Some(line) = read_line(input)? else {
            return Ok(Verdict::Quit);
        };
        match line.as_str() {
            "y" => return Ok(Verdict::Correct),
            "n" => return Ok(Verdict::Incorrect),
            "q" => return Ok(Verdict::Quit),
            "u" => match cards.revisit_last() {
                Some(last) => {
                    writeln!(out, "Last reviewed: {} -> {}", last.question(), last.answer())?
                }
                None => writeln!(out, "Nothing reviewed yet.")?,
            },
            other => writeln!(out, "Unrecognized answer {other:?}.")?,
        }
    }
}

/// Read one trimmed, lowercased line. Returns `None` at end of input.
fn read_line(input: &mut impl BufRead) -> Fallible<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_lowercase()))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use flashdeck_core::store::MemoryStore;

    use super::*;

    fn make_store() -> Fallible<CardStore<MemoryStore>> {
        let mut cards = CardStore::open(MemoryStore::new())?;
        cards.add("What is 9 + 10?", "19", "Math")?;
        cards.add("Who discovered gravity?", "Newton", "Science")?;
        Ok(cards)
    }

    fn run(
        cards: &mut CardStore<MemoryStore>,
        script: &str,
        limit: Option<usize>,
    ) -> Fallible<(DrillSummary, String)> {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut out = Vec::new();
        let summary = drill(cards, &mut input, &mut out, limit)?;
        Ok((summary, String::from_utf8_lossy(&out).into_owned()))
    }

    #[test]
    fn test_empty_queue() -> Fallible<()> {
        let mut cards = CardStore::open(MemoryStore::new())?;
        let (summary, out) = run(&mut cards, "", None)?;
        assert_eq!(summary, DrillSummary::default());
        assert_eq!(out, "No cards to review.\n");
        Ok(())
    }

    #[test]
    fn test_all_correct() -> Fallible<()> {
        let mut cards = make_store()?;
        let (summary, out) = run(&mut cards, "\ny\n\ny\n", None)?;
        assert_eq!(
            summary,
            DrillSummary {
                reviewed: 2,
                correct: 2,
                remaining: 0
            }
        );
        assert!(out.contains("[Math] Q: What is 9 + 10?"));
        assert!(out.contains("A: Newton"));
        assert!(out.ends_with("Reviewed 2 cards (2 correct), 0 remaining.\n"));
        assert_eq!(cards.review_stack_size(), 2);
        Ok(())
    }

    #[test]
    fn test_failed_card_comes_back() -> Fallible<()> {
        let mut cards = make_store()?;
        let (summary, out) = run(&mut cards, "\nn\n\ny\n\ny\n", None)?;
        assert_eq!(summary.reviewed, 3);
        assert_eq!(summary.correct, 2);
        assert_eq!(summary.remaining, 0);
        assert_eq!(out.matches("Q: What is 9 + 10?").count(), 2);
        Ok(())
    }

    #[test]
    fn test_revisit_and_invalid_answer() -> Fallible<()> {
        let mut cards = make_store()?;
        let (summary, out) = run(&mut cards, "\nu\nmaybe\ny\n\nu\nY\n", None)?;
        assert!(out.contains("Nothing reviewed yet."));
        assert!(out.contains("Unrecognized answer \"maybe\"."));
        assert!(out.contains("Last reviewed: What is 9 + 10? -> 19"));
        assert_eq!(summary.reviewed, 2);
        // The revisit took the first review off the history.
        assert_eq!(cards.review_stack_size(), 1);
        Ok(())
    }

    #[test]
    fn test_limit_and_quit() -> Fallible<()> {
        let mut cards = make_store()?;
        let (summary, _) = run(&mut cards, "\nn\n", Some(1))?;
        assert_eq!(
            summary,
            DrillSummary {
                reviewed: 1,
                correct: 0,
                remaining: 2
            }
        );

        let mut cards = make_store()?;
        let (summary, out) = run(&mut cards, "\nq\n", None)?;
        assert_eq!(summary.reviewed, 0);
        assert_eq!(summary.remaining, 1);
        assert!(out.ends_with("Reviewed 0 cards (0 correct), 1 remaining.\n"));
        Ok(())
    }

    #[test]
    fn test_end_of_input() -> Fallible<()> {
        let mut cards = make_store()?;
        let (summary, _) = run(&mut cards, "\ny\n", None)?;
        assert_eq!(summary.reviewed, 1);
        assert_eq!(summary.remaining, 0);
        Ok(())
    }
}
