use crate::models::GlyphBox;

/// Sort candidate boxes into left-to-right reading order.
pub fn sort_reading_order(boxes: &mut [GlyphBox]) {
    boxes.sort_by_key(|b| b.reading_order_key());
}

/// Resolve overlapping region proposals, keeping the larger of each
/// overlapping pair.
///
/// Greedy O(n²) pairwise pass: a removed box takes no further part in
/// comparisons, and survivors keep their input order. Ties remove the
/// earlier box. Containment that does not intersect on both axes is left
/// alone; only true 2D bounding-box overlaps are resolved.
pub fn remove_overlapping_boxes(boxes: Vec<GlyphBox>) -> Vec<GlyphBox> {
    let mut slots: Vec<Option<GlyphBox>> = boxes.into_iter().map(Some).collect();

    for i in 0..slots.len() {
        if slots[i].is_none() {
            continue;
        }
        for j in (i + 1)..slots.len() {
            let (a, b) = match (&slots[i], &slots[j]) {
                (Some(a), Some(b)) => (*a, *b),
                _ => continue,
            };

            if a.overlaps(&b) {
                if a.area() > b.area() {
                    slots[j] = None;
                } else {
                    slots[i] = None;
                    break;
                }
            }
        }
    }

    slots.into_iter().flatten().collect()
}
