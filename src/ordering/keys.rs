use catalog_core::LectureKey;

/// Parse a raw identifier ("126-2", "126") into a (lecture, part) key.
///
/// Total: anything that is not one or two non-negative integers yields
/// [`LectureKey::ZERO`]. A partially valid pair is discarded as a whole.
pub fn derive_key(identifier: Option<&str>) -> LectureKey {
    let Some(identifier) = identifier else {
        return LectureKey::ZERO;
    };
    
    if identifier.contains('-') {
        let mut segments = identifier.split('-');
        match (segments.next().map(parse_segment), segments.next().map(parse_segment)) {
            (Some(Some(major)), Some(Some(minor))) => LectureKey::new(major, minor),
            _ => LectureKey::ZERO,
        }
    } else {
        parse_segment(identifier)
            .map(|major| LectureKey::new(major, 0))
            .unwrap_or(LectureKey::ZERO)
    }
}

fn parse_segment(segment: &str) -> Option<u32> {
    segment.trim().parse().ok()
}
