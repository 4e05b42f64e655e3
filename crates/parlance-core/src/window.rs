//! Context window builder.
//!
//! Derives the bounded turn sequence sent to the completion service from
//! the full persisted history. The persisted history itself is never
//! truncated; only this view is. Pure function, no IO.

use parlance_types::turn::Turn;
use tracing::warn;

/// Build the bounded window for a completion call.
///
/// - A leading system turn is detached, exempt from the `max_turns`
///   limit, and re-attached at position 0.
/// - The last `max_turns` conversation turns are kept; older ones are
///   dropped first. No summarization.
/// - An empty history yields an empty window.
///
/// A non-empty history without a leading system turn is anomalous (the
/// orchestrator always seeds one) and is logged, but still windowed.
pub fn build_window(history: &[Turn], max_turns: usize) -> Vec<Turn> {
    if history.is_empty() {
        return Vec::new();
    }

    let (system_turn, conversation) = match history.first() {
        Some(first) if first.is_system() => (Some(&history[0]), &history[1..]),
        _ => {
            warn!(
                turns = history.len(),
                "non-empty history without leading system turn"
            );
            (None, history)
        }
    };

    let start = conversation.len().saturating_sub(max_turns);
    let mut window = Vec::with_capacity(conversation.len() - start + 1);
    if let Some(system) = system_turn {
        window.push(system.clone());
    }
    window.extend_from_slice(&conversation[start..]);
    window
}

#[cfg(test)]
mod tests {
    use super::*;
    use parlance_types::turn::TurnRole;

    /// History of `n` alternating user/assistant turns behind a system turn.
    fn history_with_system(n: usize) -> Vec<Turn> {
        let mut turns = vec![Turn::system("directive")];
        turns.extend(conversation(n));
        turns
    }

    fn conversation(n: usize) -> Vec<Turn> {
        (0..n)
            .map(|i| {
                if i % 2 == 0 {
                    Turn::user(format!("msg-{i}"))
                } else {
                    Turn::assistant(format!("msg-{i}"))
                }
            })
            .collect()
    }

    #[test]
    fn test_empty_history_yields_empty_window() {
        assert!(build_window(&[], 20).is_empty());
    }

    #[test]
    fn test_under_limit_passes_through_unchanged() {
        let history = history_with_system(5);
        let window = build_window(&history, 20);
        assert_eq!(window, history);
    }

    #[test]
    fn test_output_length_never_exceeds_max_plus_system() {
        for n in [0usize, 1, 19, 20, 21, 50, 100] {
            let history = history_with_system(n);
            let window = build_window(&history, 20);
            assert!(
                window.len() <= 21,
                "n={n}: window length {} exceeds bound",
                window.len()
            );
        }
    }

    #[test]
    fn test_leading_system_turn_retained_at_position_zero() {
        let history = history_with_system(50);
        let window = build_window(&history, 20);
        assert_eq!(window.len(), 21);
        assert_eq!(window[0].role, TurnRole::System);
        assert_eq!(
            window.iter().filter(|t| t.is_system()).count(),
            1,
            "exactly one system turn expected"
        );
    }

    #[test]
    fn test_no_system_in_yields_no_system_out() {
        let history = conversation(50);
        let window = build_window(&history, 20);
        assert_eq!(window.len(), 20);
        assert!(window.iter().all(|t| !t.is_system()));
    }

    #[test]
    fn test_truncation_drops_oldest_turns_first() {
        let history = history_with_system(30);
        let window = build_window(&history, 20);
        // Conversation turns are msg-0..msg-29; the newest 20 are msg-10..msg-29.
        assert_eq!(window[1].content, "msg-10");
        assert_eq!(window.last().unwrap().content, "msg-29");
    }

    #[test]
    fn test_idempotent_on_own_output() {
        for n in [0usize, 5, 20, 45] {
            let history = history_with_system(n);
            let once = build_window(&history, 20);
            let twice = build_window(&once, 20);
            assert_eq!(once, twice, "n={n}: re-windowing changed the output");
        }
    }

    #[test]
    fn test_max_turns_zero_keeps_only_system() {
        let history = history_with_system(10);
        let window = build_window(&history, 0);
        assert_eq!(window.len(), 1);
        assert!(window[0].is_system());
    }

    #[test]
    fn test_system_only_history() {
        let history = vec![Turn::system("directive")];
        let window = build_window(&history, 20);
        assert_eq!(window, history);
    }

    #[test]
    fn test_mid_history_system_turn_not_exempted() {
        // Only a *leading* system turn is detached; one that drifted into
        // the middle counts against the `max_turns` limit like any turn.
        let mut history = conversation(4);
        history.insert(2, Turn::system("stray"));
        let window = build_window(&history, 3);
        assert_eq!(window.len(), 3);
        assert_eq!(window[0].content, "stray");
    }
}
