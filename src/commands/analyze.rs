//! Guess analysis command
//!
//! Shows how a guess partitions the codes still consistent with a history.

use crate::core::{Code, Feedback, all_codes};
use crate::solver::minimax::group_by_feedback;

/// Result of analyzing a guess
pub struct AnalysisResult {
    pub guess: Code,
    pub total_candidates: usize,
    pub buckets: Vec<(Feedback, usize)>,
    pub worst_case: usize,
    pub expected_remaining: f64,
    pub is_candidate: bool,
}

/// Parse a history entry of the form `0123:2,0` (code, digits, positions)
///
/// # Errors
///
/// Returns an error if the code or either feedback value is malformed.
pub fn parse_history_entry(entry: &str) -> Result<(Code, Feedback), String> {
    let (code, feedback) = entry
        .split_once(':')
        .ok_or_else(|| format!("Expected CODE:DIGITS,POSITIONS, got '{entry}'"))?;

    let code: Code = code.parse().map_err(|e| format!("Invalid code: {e}"))?;

    let (digits, positions) = feedback
        .split_once(',')
        .ok_or_else(|| format!("Expected DIGITS,POSITIONS, got '{feedback}'"))?;
    let parse = |s: &str| {
        s.trim()
            .parse::<i64>()
            .map_err(|_| format!("Enter numeric feedback (0-4), got '{s}'"))
    };
    let feedback = Feedback::new(parse(digits)?, parse(positions)?).map_err(|e| e.to_string())?;

    Ok((code, feedback))
}

/// Analyze `guess` against the codes consistent with `history`
///
/// # Errors
///
/// Returns an error if the guess or a history entry is invalid, or if the
/// history leaves no consistent code.
pub fn analyze_code(guess: &str, history: &[String]) -> Result<AnalysisResult, String> {
    let guess: Code = guess.parse().map_err(|e| format!("Invalid code: {e}"))?;

    let history = history
        .iter()
        .map(String::as_str)
        .map(parse_history_entry)
        .collect::<Result<Vec<_>, _>>()?;

    let candidates: Vec<Code> = all_codes()
        .iter()
        .filter(|c| {
            history
                .iter()
                .all(|(played, fb)| Feedback::calculate(played, c) == *fb)
        })
        .copied()
        .collect();

    if candidates.is_empty() {
        return Err("No possible code fits that history".to_string());
    }

    let groups = group_by_feedback(&guess, &candidates);
    let mut buckets: Vec<(Feedback, usize)> = groups.into_iter().collect();
    buckets.sort_by_key(|(fb, _)| fb.index());

    let total_candidates = candidates.len();
    let worst_case = buckets.iter().map(|&(_, n)| n).max().unwrap_or(0);
    let expected_remaining = buckets
        .iter()
        .map(|&(_, n)| (n * n) as f64)
        .sum::<f64>()
        / total_candidates as f64;

    Ok(AnalysisResult {
        guess,
        total_candidates,
        buckets,
        worst_case,
        expected_remaining,
        is_candidate: candidates.contains(&guess),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analyze_opening_against_full_space() {
        let result = analyze_code("0123", &[]).unwrap();

        assert_eq!(result.total_candidates, 5040);
        assert!(result.is_candidate);
        assert_eq!(result.buckets.iter().map(|&(_, n)| n).sum::<usize>(), 5040);
        assert_eq!(
            result.worst_case,
            result.buckets.iter().map(|&(_, n)| n).max().unwrap()
        );
    }

    #[test]
    fn analyze_with_history() {
        let history = vec!["0123:2,0".to_string()];
        let result = analyze_code("4501", &history).unwrap();

        assert!(result.total_candidates < 5040);
        assert!(result.expected_remaining >= 1.0);
        assert!(result.expected_remaining <= result.total_candidates as f64);
    }

    #[test]
    fn analyze_invalid_code() {
        assert!(analyze_code("0012", &[]).is_err());
    }

    #[test]
    fn analyze_contradictory_history() {
        let history = vec!["0123:4,3".to_string()];
        assert!(analyze_code("4567", &history).is_err());
    }

    #[test]
    fn history_entry_parsing() {
        let (code, fb) = parse_history_entry("5391:3, 1").unwrap();
        assert_eq!(code.to_string(), "5391");
        assert_eq!(fb, Feedback::new(3, 1).unwrap());

        assert!(parse_history_entry("5391").is_err());
        assert!(parse_history_entry("5391:3").is_err());
        assert!(parse_history_entry("5391:x,1").is_err());
        assert!(parse_history_entry("5391:1,2").is_err());
    }
}
