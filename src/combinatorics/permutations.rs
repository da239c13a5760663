use crate::error::{ToolError, ToolResult};

/// Visits every positional arrangement of `buffer` using Heap's algorithm.
///
/// The buffer is permuted in place and handed to `visit` once per arrangement,
/// `buffer.len()!` times in total. Repeated elements are treated positionally,
/// so they yield repeated arrangements. An empty buffer visits nothing.
pub fn for_each_permutation<T, F>(buffer: &mut [T], mut visit: F)
where
    F: FnMut(&[T]),
{
    if buffer.is_empty() {
        return;
    }
    let active = buffer.len() - 1;
    heap_permute(buffer, active, &mut visit);
}

fn heap_permute<T, F>(buffer: &mut [T], active: usize, visit: &mut F)
where
    F: FnMut(&[T]),
{
    if active == 0 {
        visit(buffer);
        return;
    }

    heap_permute(buffer, active - 1, visit);
    for i in 0..active {
        let j = if active % 2 == 0 { 0 } else { i };
        buffer.swap(j, active);
        heap_permute(buffer, active - 1, visit);
    }
}

/// Collects every positional permutation of `word` as a string.
///
/// The result holds exactly `len!` entries in Heap's generation order.
pub fn generate_permutations(word: &str) -> ToolResult<Vec<String>> {
    let mut buffer: Vec<char> = word.chars().collect();
    if buffer.is_empty() {
        return Err(ToolError::EmptyInput);
    }

    let mut output = Vec::with_capacity(permutation_count(buffer.len()));
    for_each_permutation(&mut buffer, |arrangement| {
        output.push(arrangement.iter().collect::<String>());
    });
    tracing::debug!(
        length = buffer.len(),
        permutations = output.len(),
        "generated permutations"
    );
    Ok(output)
}

/// `len!`, saturating at `usize::MAX`.
pub fn permutation_count(len: usize) -> usize {
    (2..=len).fold(1usize, |acc, k| acc.saturating_mul(k))
}
