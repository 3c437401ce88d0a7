use crate::frontend::errors::InputError;

/// Scan a free-text page request string: commas count as whitespace,
/// tokens that do not parse as numbers are silently dropped. An empty
/// result is not an error here; callers that need at least one page go
/// through [`parse_references`].
pub fn parse_reference_string(input: &str) -> Vec<u32> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .filter_map(|token| token.parse::<u32>().ok())
        .collect()
}

/// Like [`parse_reference_string`], but an input with no usable page
/// numbers at all is an error.
pub fn parse_references(input: &str) -> Result<Vec<u32>, InputError> {
    let pages = parse_reference_string(input);
    if pages.is_empty() {
        return Err(InputError::NoPages);
    }
    Ok(pages)
}

/// Frame count must parse as an integer and be at least 1.
pub fn parse_frame_count(input: &str) -> Result<usize, InputError> {
    match input.trim().parse::<usize>() {
        Ok(count) if count >= 1 => Ok(count),
        _ => Err(InputError::InvalidFrameCount {
            input: input.trim().to_string(),
        }),
    }
}
