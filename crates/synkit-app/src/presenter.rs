use std::io::{self, BufRead, Write};

use kanal::AsyncReceiver;
use synkit_config::Config;
use synkit_types::{AppEvent, CHILD_MARKER, DisplayMethod, ResultList, Selection, insertion_text};

use crate::editor::EditorBuffer;

/// Host selection UI. Returns the chosen index, `Selection::CANCELLED_INDEX`
/// when the user backs out.
pub trait SelectionPrompt {
    fn choose(&mut self, items: &[String], method: DisplayMethod) -> i64;
}

/// Answer given up front (`--pick`)
pub struct FixedPick(pub i64);

impl SelectionPrompt for FixedPick {
    fn choose(&mut self, _items: &[String], _method: DisplayMethod) -> i64 {
        self.0
    }
}

/// Numbered list on stdout, answer read from stdin
pub struct StdinPrompt;

impl SelectionPrompt for StdinPrompt {
    fn choose(&mut self, items: &[String], method: DisplayMethod) -> i64 {
        let mut stdout = io::stdout().lock();
        for (i, item) in items.iter().enumerate() {
            let shown = match method {
                DisplayMethod::QuickPanel => item.replace(CHILD_MARKER, "    "),
                DisplayMethod::Popup => insertion_text(item).to_string(),
            };
            let _ = writeln!(stdout, "{i:>3}  {shown}");
        }
        let _ = write!(stdout, "Pick a result (empty or q cancels): ");
        let _ = stdout.flush();

        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(_) => parse_choice(&line),
            Err(_) => Selection::CANCELLED_INDEX,
        }
    }
}

pub fn parse_choice(line: &str) -> i64 {
    let line = line.trim();
    if line.is_empty() || line.eq_ignore_ascii_case("q") {
        return Selection::CANCELLED_INDEX;
    }
    line.parse().unwrap_or(Selection::CANCELLED_INDEX)
}

/// Hand `results` to the host prompt and report the outcome to `on_select`.
/// An empty list is never shown.
pub fn present<F>(
    results: &ResultList,
    prompt: &mut dyn SelectionPrompt,
    method: DisplayMethod,
    on_select: F,
) where
    F: FnOnce(Selection),
{
    if results.is_empty() {
        tracing::debug!("Nothing to present");
        return;
    }

    let index = prompt.choose(results.as_slice(), method);
    on_select(Selection::from_index(index));
}

/// Replace the word at the cursor with the selected line, marker and
/// whitespace stripped. Returns the inserted text.
pub fn apply_selection(
    editor: &mut EditorBuffer,
    results: &ResultList,
    selection: Selection,
) -> Option<String> {
    let Selection::Index(index) = selection else {
        tracing::debug!("Selection cancelled");
        return None;
    };

    let Some(line) = results.get(index) else {
        tracing::warn!("Selection {} is out of range", index);
        return None;
    };

    let text = insertion_text(line);
    if text.is_empty() || !editor.replace_current_word(text) {
        return None;
    }

    Some(text.to_string())
}

/// Present `results` and apply the choice to `editor`
pub async fn present_and_apply(
    results: &ResultList,
    editor: &mut EditorBuffer,
    prompt: &mut dyn SelectionPrompt,
    config: &Config,
) -> Option<String> {
    let mut inserted = None;
    present(results, prompt, config.ui.display_method, |selection| {
        inserted = apply_selection(editor, results, selection);
    });

    if let Some(text) = &inserted {
        tracing::debug!("Inserted '{}'", text);
        if let Err(e) = synkit_io::read_aloud(text, &config.voice).await {
            tracing::warn!("Read aloud failed: {}", e);
        }
    }

    inserted
}

/// Host side of a session: show status updates for `slot` until its
/// results arrive, then present them.
pub async fn host_loop(
    app_to_host_rx: &AsyncReceiver<AppEvent>,
    slot: &str,
    editor: &mut EditorBuffer,
    prompt: &mut dyn SelectionPrompt,
    config: &Config,
) -> anyhow::Result<Option<String>> {
    loop {
        match app_to_host_rx.recv().await? {
            AppEvent::StatusUpdate { slot: from, status } if from == slot => {
                eprintln!("{status}");
            }
            AppEvent::ShowResults {
                slot: from,
                word,
                results,
            } if from == slot => {
                tracing::debug!("Presenting {} result(s) for '{}'", results.len(), word);
                return Ok(present_and_apply(&results, editor, prompt, config).await);
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn results() -> ResultList {
        ResultList::from(vec![
            "빠르다".to_string(),
            "\t신속하다".to_string(),
            "\t 재빠르다 ".to_string(),
        ])
    }

    #[test]
    fn test_parse_choice() {
        assert_eq!(parse_choice("2\n"), 2);
        assert_eq!(parse_choice(""), Selection::CANCELLED_INDEX);
        assert_eq!(parse_choice("q"), Selection::CANCELLED_INDEX);
        assert_eq!(parse_choice("-1"), Selection::CANCELLED_INDEX);
        assert_eq!(parse_choice("abc"), Selection::CANCELLED_INDEX);
    }

    #[test]
    fn test_apply_strips_marker_and_whitespace() {
        let mut editor = EditorBuffer::new("아주 빠르다", 4);
        let inserted = apply_selection(&mut editor, &results(), Selection::Index(2));

        assert_eq!(inserted.as_deref(), Some("재빠르다"));
        assert_eq!(editor.text(), "아주 재빠르다");
    }

    #[test]
    fn test_cancelled_selection_never_replaces() {
        let mut editor = EditorBuffer::new("아주 빠르다", 4);
        let mut called = false;

        present(
            &results(),
            &mut FixedPick(Selection::CANCELLED_INDEX),
            DisplayMethod::QuickPanel,
            |selection| {
                called = true;
                assert_eq!(apply_selection(&mut editor, &results(), selection), None);
            },
        );

        assert!(called);
        assert_eq!(editor.text(), "아주 빠르다");
    }

    #[test]
    fn test_out_of_range_selection_is_ignored() {
        let mut editor = EditorBuffer::new("빠르다", 0);
        assert_eq!(apply_selection(&mut editor, &results(), Selection::Index(9)), None);
        assert_eq!(editor.text(), "빠르다");
    }

    #[test]
    fn test_empty_results_are_not_presented() {
        let mut called = false;
        present(
            &ResultList::new(),
            &mut FixedPick(0),
            DisplayMethod::Popup,
            |_| called = true,
        );
        assert!(!called);
    }
}
