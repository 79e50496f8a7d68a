//! Presentation of index-level alignments
//!
//! Pure functions turning a [`LocalAlignment`] back into token space:
//! parallel token columns, matched ranges, and human-readable diff views.
//! Nothing here affects scoring; it is string construction only.

use crate::align::LocalAlignment;

/// Character width of a token (alignment columns are padded in characters,
/// not bytes)
fn width(s: &str) -> usize {
    s.chars().count()
}

fn ljust(s: &str, w: usize) -> String {
    let pad = w.saturating_sub(width(s));
    let mut out = String::with_capacity(s.len() + pad);
    out.push_str(s);
    out.extend(std::iter::repeat(' ').take(pad));
    out
}

fn rjust(s: &str, w: usize) -> String {
    let pad = w.saturating_sub(width(s));
    let mut out = String::with_capacity(s.len() + pad);
    out.extend(std::iter::repeat(' ').take(pad));
    out.push_str(s);
    out
}

/// Parallel token columns with `None` marking gap positions
pub fn aligned_tokens<'a>(
    s1: &'a [String],
    s2: &'a [String],
    aln: &LocalAlignment,
) -> (Vec<Option<&'a str>>, Vec<Option<&'a str>>) {
    let t1 = aln.a1.iter().map(|i| i.map(|i| s1[i].as_str())).collect();
    let t2 = aln.a2.iter().map(|j| j.map(|j| s2[j].as_str())).collect();
    (t1, t2)
}

/// Contiguous matched ranges per sequence
///
/// Consecutive non-gap indices collapse into half-open `(start, end)`
/// ranges over the source sequence.
pub fn matched_ranges(aln: &LocalAlignment) -> (Vec<(usize, usize)>, Vec<(usize, usize)>) {
    fn ranges(column: &[Option<usize>]) -> Vec<(usize, usize)> {
        let mut out = Vec::new();
        let mut run: Option<(usize, usize)> = None;
        for entry in column {
            match (*entry, run) {
                (Some(idx), None) => run = Some((idx, idx)),
                (Some(idx), Some((start, _))) => run = Some((start, idx)),
                (None, Some((start, last))) => {
                    out.push((start, last + 1));
                    run = None;
                }
                (None, None) => {}
            }
        }
        if let Some((start, last)) = run {
            out.push((start, last + 1));
        }
        out
    }

    (ranges(&aln.a1), ranges(&aln.a2))
}

/// Three-column diff over the aligned core
///
/// One line per alignment column: left token, marker, right token. The
/// marker is `==` for identical tokens, `!=` for substitutions and `-`
/// next to a gap; gaps render as `-`. Columns are left-justified to the
/// widest token of their side.
pub fn printable_diff(s1: &[String], s2: &[String], aln: &LocalAlignment) -> String {
    let (t1, t2) = aligned_tokens(s1, s2, aln);

    let cell = |t: Option<&str>| t.unwrap_or("-").to_string();
    let max1 = t1.iter().map(|t| width(&cell(*t))).max().unwrap_or(0);
    let max2 = t2.iter().map(|t| width(&cell(*t))).max().unwrap_or(0);

    let mut lines = Vec::with_capacity(t1.len());
    for (left, right) in t1.iter().zip(t2.iter()) {
        let sep = match (left, right) {
            (Some(a), Some(b)) if a == b => "==",
            (None, _) | (_, None) => "-",
            _ => "!=",
        };
        lines.push(format!(
            "{} {} {}",
            ljust(&cell(*left), max1),
            sep,
            ljust(&cell(*right), max2)
        ));
    }

    lines.join("\n")
}

/// Horizontal rendering with unaligned flanking context
///
/// Returns (top sequence, marker line, bottom sequence). The unaligned
/// left flanks are right-justified against each other, the right flanks
/// left-justified, and within the aligned core each column is padded to
/// the wider of its two tokens. Markers: `-` under identical tokens, `x`
/// under substitutions, blanks under gaps and flanks.
pub fn horizontal_alignment(
    s1: &[String],
    s2: &[String],
    aln: &LocalAlignment,
) -> (String, String, String) {
    if aln.is_empty() {
        return (s1.join(" "), " ".to_string(), s2.join(" "));
    }

    // Left flank, padded so both sequences enter the core in the same
    // column.
    let start1 = aln.a1.iter().flatten().next().copied().unwrap_or(0);
    let start2 = aln.a2.iter().flatten().next().copied().unwrap_or(0);
    let head1 = s1[..start1].join(" ");
    let head2 = s2[..start2].join(" ");
    let (w1, w2) = (width(&head1), width(&head2));
    let mut str1 = rjust(&head1, w2);
    let mut str2 = rjust(&head2, w1);
    let mut marks = " ".repeat(width(&str1));

    for (left, right) in aln.a1.iter().zip(aln.a2.iter()) {
        match (left, right) {
            (Some(i), Some(j)) => {
                let (t1, t2) = (s1[*i].as_str(), s2[*j].as_str());
                str1.push(' ');
                str1.push_str(&rjust(t1, width(t2)));
                str2.push(' ');
                str2.push_str(&rjust(t2, width(t1)));
                let sym = if t1 == t2 { "-" } else { "x" };
                marks.push(' ');
                marks.push_str(&rjust(&sym.repeat(width(t2)), width(t1)));
            }
            (Some(i), None) => {
                let t1 = s1[*i].as_str();
                let blank = " ".repeat(width(t1));
                str1.push(' ');
                str1.push_str(t1);
                str2.push(' ');
                str2.push_str(&blank);
                marks.push(' ');
                marks.push_str(&blank);
            }
            (None, Some(j)) => {
                let t2 = s2[*j].as_str();
                let blank = " ".repeat(width(t2));
                str1.push(' ');
                str1.push_str(&blank);
                str2.push(' ');
                str2.push_str(t2);
                marks.push(' ');
                marks.push_str(&blank);
            }
            // Traceback never emits a gap on both sides of a column.
            (None, None) => {}
        }
    }

    // Right flank, left-justified against each other.
    let end1 = aln.a1.iter().rev().flatten().next().copied().unwrap_or(0) + 1;
    let end2 = aln.a2.iter().rev().flatten().next().copied().unwrap_or(0) + 1;
    let tail1 = s1[end1..].join(" ");
    let tail2 = s2[end2..].join(" ");
    str1.push(' ');
    str1.push_str(&ljust(&tail1, width(&tail2)));
    str2.push(' ');
    str2.push_str(&ljust(&tail2, width(&tail1)));

    (str1, marks, str2)
}
