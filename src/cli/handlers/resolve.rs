//! Note resolution utilities.

use crate::domain::Note;

/// Result of resolving a note identifier.
#[derive(Debug, PartialEq, Eq)]
pub enum ResolveResult {
    /// Exactly one note matched; holds its position.
    Unique(usize),
    /// Multiple notes matched (ambiguous); holds their positions.
    Ambiguous(Vec<usize>),
    /// No notes matched.
    NotFound,
}

/// Prints the candidates of an ambiguous identifier to stderr.
pub(crate) fn print_ambiguous_notes(identifier: &str, notes: &[Note], positions: &[usize]) {
    eprintln!(
        "Ambiguous: '{}' matches {} notes:",
        identifier,
        positions.len()
    );
    for &pos in positions {
        let note = &notes[pos];
        eprintln!("  {:>3}  {} - {}", pos + 1, note.id().prefix(), note.title());
    }
    eprintln!();
    eprintln!("Use the position or a longer ID prefix to specify which note you mean.");
}

/// Resolves a note identifier to a position in `notes`.
///
/// Resolution order:
/// 1. Exact ID match
/// 2. 1-based position (when the input is a number within range)
/// 3. ID prefix match (case-insensitive)
/// 4. Exact title match (case-insensitive)
///
/// The first rule that matches anything decides the result.
pub fn resolve_note(notes: &[Note], identifier: &str) -> ResolveResult {
    let identifier = identifier.trim();
    if identifier.is_empty() {
        return ResolveResult::NotFound;
    }

    // 1. Exact ID wins outright
    if let Some(pos) = notes.iter().position(|n| n.id().as_str() == identifier) {
        return ResolveResult::Unique(pos);
    }

    // 2. Position
    if let Ok(n) = identifier.parse::<usize>() {
        if (1..=notes.len()).contains(&n) {
            return ResolveResult::Unique(n - 1);
        }
    }

    // 3. ID prefix
    let needle = identifier.to_ascii_uppercase();
    let by_prefix: Vec<usize> = notes
        .iter()
        .enumerate()
        .filter(|(_, n)| n.id().as_str().to_ascii_uppercase().starts_with(&needle))
        .map(|(i, _)| i)
        .collect();
    if !by_prefix.is_empty() {
        return from_candidates(by_prefix);
    }

    // 4. Title
    let by_title: Vec<usize> = notes
        .iter()
        .enumerate()
        .filter(|(_, n)| n.title().trim().eq_ignore_ascii_case(identifier))
        .map(|(i, _)| i)
        .collect();
    from_candidates(by_title)
}

fn from_candidates(mut candidates: Vec<usize>) -> ResolveResult {
    match candidates.len() {
        0 => ResolveResult::NotFound,
        1 => ResolveResult::Unique(candidates.remove(0)),
        _ => ResolveResult::Ambiguous(candidates),
    }
}
