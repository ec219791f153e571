// the collection of utility functions mainly for bracket parsing and numerical checks
// all bracket helpers work on byte indices; the parser only admits ASCII input

/// true if every `(` and `[` has a matching partner of the same kind and no closing
/// bracket comes before its opening one
pub fn has_balanced_brackets(s: &str) -> bool {
    let mut stack = Vec::new();
    for c in s.bytes() {
        match c {
            b'(' | b'[' => stack.push(c),
            b')' => {
                if stack.pop() != Some(b'(') {
                    return false;
                }
            }
            b']' => {
                if stack.pop() != Some(b'[') {
                    return false;
                }
            }
            _ => {}
        }
    }
    stack.is_empty()
}

/// Scope depth at the position `index`, i.e. the count of unmatched brackets in `s[..index]`
pub fn scope_depth(s: &str, index: usize) -> i64 {
    s.bytes().take(index).fold(0, |depth, c| match c {
        b'(' | b'[' => depth + 1,
        b')' | b']' => depth - 1,
        _ => depth,
    })
}

// finds the position of the bracket closing the `(` or `[` at bracket_start. The scan is bounded
// by the string length, None means the bracket is never closed
pub fn find_pair_to_this_bracket(input: &str, bracket_start: usize) -> Option<usize> {
    let bytes = input.as_bytes();
    if !matches!(bytes.get(bracket_start), Some(b'(') | Some(b'[')) {
        return None;
    }
    let mut stack = 0usize;
    for (i, c) in bytes.iter().enumerate().skip(bracket_start) {
        match c {
            b'(' | b'[' => stack += 1,
            b')' | b']' => {
                stack -= 1;
                if stack == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

// the same scan running backward: position of the bracket opening the `)` or `]` at bracket_end
pub fn find_pair_to_this_closing_bracket(input: &str, bracket_end: usize) -> Option<usize> {
    let bytes = input.as_bytes();
    if !matches!(bytes.get(bracket_end), Some(b')') | Some(b']')) {
        return None;
    }
    let mut stack = 0usize;
    for i in (0..=bracket_end).rev() {
        match bytes[i] {
            b')' | b']' => stack += 1,
            b'(' | b'[' => {
                stack -= 1;
                if stack == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

/// Repeatedly removes one layer of parentheses that encloses the whole string
pub fn strip_outer_brackets(mut s: &str) -> &str {
    while s.len() >= 2
        && s.starts_with('(')
        && find_pair_to_this_bracket(s, 0) == Some(s.len() - 1)
    {
        s = &s[1..s.len() - 1];
    }
    s
}

// find position of the first occurrence of the char that lies outside brackets only
pub fn find_char_positions_outside_brackets(s: &str, c: char) -> Option<usize> {
    let mut depth = 0i64;
    for (i, ch) in s.char_indices() {
        if ch == '(' || ch == '[' {
            depth += 1;
        } else if ch == ')' || ch == ']' {
            depth -= 1;
        } else if ch == c && depth == 0 {
            return Some(i);
        }
    }
    None
}

/// Finds every occurrence of `pattern` in `s` that starts at scope depth zero
pub fn find_substring_positions_outside_brackets(s: &str, pattern: &str) -> Vec<usize> {
    s.match_indices(pattern)
        .map(|(i, _)| i)
        .filter(|i| scope_depth(s, *i) == 0)
        .collect()
}

pub fn linspace(start: f64, end: f64, num_values: usize) -> Vec<f64> {
    if num_values < 2 {
        return vec![start; num_values];
    }
    let step = (end - start) / (num_values as f64 - 1.0);
    (0..num_values).map(|i| start + (i as f64 * step)).collect()
}

/// centred finite difference of `f` at every point of `x_values`
pub fn numerical_derivative<F>(f: F, x_values: &[f64], h: f64) -> Vec<f64>
where
    F: Fn(f64) -> f64,
{
    x_values
        .iter()
        .map(|&x| (f(x + h) - f(x - h)) / (2.0 * h))
        .collect()
}

// compute norm of the difference of two vectors
pub fn norm(x: &[f64], y: &[f64]) -> f64 {
    debug_assert_eq!(x.len(), y.len());
    if x.is_empty() {
        return 0.0;
    }
    (1.0 / x.len() as f64)
        * x.iter()
            .zip(y.iter())
            .map(|(a, b)| (a - b).powi(2))
            .sum::<f64>()
            .sqrt()
}
