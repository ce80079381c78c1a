use crate::glyph::Glyph;

/// Maps every glyph of a font to the first glyph with identical pixels.
///
/// Only glyphs that reference themselves get pixel data emitted, every other glyph shares the
/// data of its earliest duplicate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DedupIndex(Vec<usize>);
impl DedupIndex {
    pub fn reference(&self, glyph: usize) -> usize {
        self.0[glyph]
    }

    pub fn references(&self) -> &[usize] {
        &self.0
    }

    /// The glyphs that own their pixel data, in ascending order.
    pub fn unique(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().enumerate().filter(|(i, r)| *i == **r).map(|(i, _)| i)
    }

    pub fn unique_count(&self) -> usize {
        self.unique().count()
    }
}

pub fn dedup_index(glyphs: &[Glyph]) -> DedupIndex {
    DedupIndex(
        glyphs
            .iter()
            .enumerate()
            .map(|(i, glyph)| glyphs[..i].iter().position(|x| x == glyph).unwrap_or(i))
            .collect(),
    )
}

#[cfg(test)]
mod test {
    use super::dedup_index;
    use crate::glyph::Glyph;
    use quickcheck::quickcheck;

    /// A 1x3 glyph, so that random inputs collide often.
    fn small_glyph(bits: u8) -> Glyph {
        Glyph::new(1, 3, (0..3).map(|x| (bits >> x) & 1 != 0).collect()).unwrap()
    }

    #[test]
    fn test_first_occurrence_wins() {
        let glyphs: Vec<_> = [0, 1, 0, 2, 1, 0].iter().map(|x| small_glyph(*x)).collect();
        let index = dedup_index(&glyphs);
        assert_eq!(index.references(), &[0, 1, 0, 3, 1, 0]);
        assert_eq!(index.unique().collect::<Vec<_>>(), [0, 1, 3]);
        assert_eq!(index.unique_count(), 3);
    }

    #[test]
    fn test_shape_is_part_of_identity() {
        let glyphs = [
            Glyph::new(2, 1, vec![true, false]).unwrap(),
            Glyph::new(1, 2, vec![true, false]).unwrap(),
        ];
        assert_eq!(dedup_index(&glyphs).references(), &[0, 1]);
    }

    #[test]
    fn test_fonts_are_independent() {
        let font_a: Vec<_> = [1, 2, 3].iter().map(|x| small_glyph(*x)).collect();
        let font_b: Vec<_> = [4, 5, 3].iter().map(|x| small_glyph(*x)).collect();
        assert_eq!(dedup_index(&font_a).references(), &[0, 1, 2]);
        assert_eq!(dedup_index(&font_b).references(), &[0, 1, 2]);
    }

    quickcheck! {
        fn check_references_point_to_earliest(data: Vec<u8>) -> bool {
            let glyphs: Vec<_> = data.iter().map(|x| small_glyph(*x)).collect();
            let index = dedup_index(&glyphs);
            glyphs.iter().enumerate().all(|(i, glyph)| {
                let r = index.reference(i);
                r <= i
                    && glyphs[r] == *glyph
                    && index.reference(r) == r
                    && !glyphs[..r].contains(glyph)
            })
        }
    }

    quickcheck! {
        fn check_unique_glyphs_are_distinct(data: Vec<u8>) -> bool {
            let glyphs: Vec<_> = data.iter().map(|x| small_glyph(*x)).collect();
            let index = dedup_index(&glyphs);
            let unique: Vec<_> = index.unique().map(|x| &glyphs[x]).collect();
            unique.iter().enumerate().all(|(i, x)| !unique[..i].contains(x))
                && glyphs.iter().all(|x| unique.contains(&x))
        }
    }
}
