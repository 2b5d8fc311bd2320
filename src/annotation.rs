//! Extraction of `@api*` directive lines from a controller action's doc comment.

const DESC_MARKER: &str = "@apiDesc";
const PARAM_MARKER: &str = "@apiParam";
const ERR_MARKER: &str = "@apiErr";
const RESP_MARKER: &str = "@apiResp";

/// Directive content collected from one doc comment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotationBlock {
    /// Payload of the last `@apiDesc` line
    pub desc: Option<String>,
    /// Payloads of every `@apiParam` line, in source order
    pub params: Vec<String>,
    /// Payloads of every `@apiErr` and `@apiResp` line, interleaved in source order
    pub responses: Vec<String>,
}

impl AnnotationBlock {
    /// True when no directive line was recognized
    pub fn is_empty(&self) -> bool {
        self.desc.is_none() && self.params.is_empty() && self.responses.is_empty()
    }
}

/// Parses raw doc comment text into an [`AnnotationBlock`].
///
/// Each line is tested against the markers in the fixed order desc, param, err, resp
/// and only the first hit counts. A marker may appear anywhere on the line; its
/// payload is whatever follows it, trimmed. Empty payloads are dropped.
pub fn parse(raw_doc: &str) -> AnnotationBlock {
    let mut block = AnnotationBlock::default();

    for line in raw_doc.lines() {
        // A matched marker claims the line even when its payload is empty
        let Some((marker, Some(payload))) = first_marker(line) else {
            continue;
        };
        match marker {
            DESC_MARKER => block.desc = Some(payload),
            PARAM_MARKER => block.params.push(payload),
            _ => block.responses.push(payload),
        }
    }

    block
}

/// Same as [`parse`], but a missing doc comment yields an empty block.
pub fn parse_optional(raw_doc: Option<&str>) -> AnnotationBlock {
    raw_doc.map(parse).unwrap_or_default()
}

/// Returns the first marker (in priority order) present on `line` and its payload.
fn first_marker(line: &str) -> Option<(&'static str, Option<String>)> {
    [DESC_MARKER, PARAM_MARKER, ERR_MARKER, RESP_MARKER]
        .into_iter()
        .find_map(|marker| {
            let start = line.find(marker)? + marker.len();
            Some((marker, payload_of(&line[start..])))
        })
}

fn payload_of(rest: &str) -> Option<String> {
    let payload = rest.trim();
    // A one-line docblock ends with the comment terminator
    let payload = payload.strip_suffix("*/").unwrap_or(payload).trim();
    if payload.is_empty() {
        None
    } else {
        Some(payload.to_string())
    }
}
