use crate::PatternError;

/// Decoded RLE pattern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    pub width: usize,
    pub height: usize,
    /// Living cells as `(row, col)` relative to the pattern's top-left corner.
    pub alive: Vec<(usize, usize)>,
}

/// Parses the RLE format: `#` comment lines, an `x = W, y = H` header,
/// then `b`/`o`/`$` runs terminated by `!`.
pub fn parse_rle(data: &[u8]) -> Result<Pattern, PatternError> {
    let parse_next_number = |i: &mut usize| -> Result<usize, PatternError> {
        let j = {
            let mut j = *i;
            while j < data.len() && data[j].is_ascii_digit() {
                j += 1;
            }
            j
        };
        let ans = std::str::from_utf8(&data[*i..j])
            .ok()
            .and_then(|s| s.parse::<usize>().ok())
            .ok_or(PatternError::InvalidNumber(*i))?;
        *i = j;
        Ok(ans)
    };

    let mut i = 0;
    // skipping comment lines
    loop {
        while i < data.len() && data[i].is_ascii_whitespace() {
            i += 1;
        }
        if i < data.len() && data[i] == b'#' {
            while i < data.len() && data[i] != b'\n' {
                i += 1;
            }
        } else {
            break;
        }
    }
    // next line must start with 'x'; parsing sizes
    if data.get(i) != Some(&b'x') {
        return Err(PatternError::MissingHeader);
    }
    let line_end = data[i..]
        .iter()
        .position(|&b| b == b'\n')
        .map_or(data.len(), |p| i + p);
    let (width, height) = parse_header(&data[i..line_end], i)?;
    i = line_end;

    // run-length encoded pattern data
    let mut alive = vec![];
    let (mut row, mut col, mut cnt): (usize, usize, usize) = (0, 0, 1);
    while i < data.len() {
        match data[i] {
            b'0'..=b'9' => cnt = parse_next_number(&mut i)?,
            b'o' => {
                for _ in 0..cnt {
                    if row >= height || col >= width {
                        return Err(PatternError::OutOfBounds {
                            row,
                            col,
                            width,
                            height,
                        });
                    }
                    alive.push((row, col));
                    col += 1;
                }
                (i, cnt) = (i + 1, 1);
            }
            // saturated positions fail the bounds check on the next `o`
            b'b' => (col, i, cnt) = (col.saturating_add(cnt), i + 1, 1),
            b'$' => (row, col, i, cnt) = (row.saturating_add(cnt), 0, i + 1, 1),
            b'!' => break,
            b if b.is_ascii_whitespace() => i += 1,
            b => return Err(PatternError::UnexpectedSymbol(b as char, i)),
        }
    }
    Ok(Pattern {
        width,
        height,
        alive,
    })
}

/// `x = W, y = H[, rule = ...]`; `offset` is where the line starts.
fn parse_header(line: &[u8], offset: usize) -> Result<(usize, usize), PatternError> {
    let line = std::str::from_utf8(line).map_err(|_| PatternError::MissingHeader)?;
    let (mut width, mut height) = (None, None);
    for field in line.split(',') {
        let (key, value) = field.split_once('=').ok_or(PatternError::MissingHeader)?;
        let parse = |v: &str| {
            v.trim()
                .parse::<usize>()
                .map_err(|_| PatternError::InvalidNumber(offset))
        };
        match key.trim() {
            "x" => width = Some(parse(value)?),
            "y" => height = Some(parse(value)?),
            _ => {}
        }
    }
    match (width, height) {
        (Some(w), Some(h)) => Ok((w, h)),
        _ => Err(PatternError::MissingHeader),
    }
}
