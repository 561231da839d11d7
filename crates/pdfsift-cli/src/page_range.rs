/// Parse a page range string like "2-5" or "3" into 0-indexed `(start, end)` bounds.
///
/// Input is 1-indexed and inclusive (user-facing). Output is 0-indexed with an
/// exclusive end, ready for `ExtractionRequest::with_pages`. Pages beyond the
/// document are not an error here; the extractor clamps them.
pub fn parse_page_range(input: &str) -> Result<(usize, usize), String> {
    let input = input.trim();
    let (start, end) = match input.split_once('-') {
        Some((start_str, end_str)) => (parse_page(start_str)?, parse_page(end_str)?),
        None => {
            let page = parse_page(input)?;
            (page, page)
        }
    };

    if start > end {
        return Err(format!(
            "invalid page range '{input}': start page {start} is after end page {end}"
        ));
    }

    Ok((start - 1, end))
}

fn parse_page(s: &str) -> Result<usize, String> {
    let s = s.trim();
    let page: usize = s
        .parse()
        .map_err(|_| format!("invalid page number: '{s}'"))?;
    if page == 0 {
        return Err("page 0 is invalid (pages start at 1)".to_string());
    }
    Ok(page)
}
