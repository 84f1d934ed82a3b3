use crate::domain::model::NameParts;
use std::fmt;

/// 將姓名各部分依 first、middle、last 順序以單一空白連接。
///
/// 缺席與空字串的部分都會被略過，全部缺席時回傳空字串。
pub fn full_name(parts: &NameParts) -> String {
    parts.present_parts().collect::<Vec<_>>().join(" ")
}

impl NameParts {
    pub fn full_name(&self) -> String {
        full_name(self)
    }
}

impl fmt::Display for NameParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, part) in self.present_parts().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(part)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(first: Option<&str>, middle: Option<&str>, last: Option<&str>) -> NameParts {
        NameParts::new(first, middle, last)
    }

    #[test]
    fn test_first_and_last() {
        assert_eq!(full_name(&parts(Some("Ada"), None, Some("Lovelace"))), "Ada Lovelace");
    }

    #[test]
    fn test_all_three_parts() {
        assert_eq!(
            full_name(&parts(Some("Grace"), Some("Brewster"), Some("Hopper"))),
            "Grace Brewster Hopper"
        );
    }

    #[test]
    fn test_all_absent_is_empty() {
        assert_eq!(full_name(&NameParts::default()), "");
        assert_eq!(full_name(&parts(Some(""), Some(""), Some(""))), "");
    }

    #[test]
    fn test_empty_strings_are_dropped() {
        assert_eq!(full_name(&parts(Some(""), Some("Q"), Some(""))), "Q");
    }

    #[test]
    fn test_single_part_is_returned_verbatim() {
        assert_eq!(full_name(&parts(Some("Cher"), None, None)), "Cher");
        assert_eq!(full_name(&parts(None, Some("Q"), None)), "Q");
        assert_eq!(full_name(&parts(None, None, Some("Prince"))), "Prince");
    }

    #[test]
    fn test_order_preserved_for_every_subset() {
        let values = ["A", "B", "C"];
        for mask in 0u8..8 {
            let pick = |i: usize| (mask & (1 << i) != 0).then_some(values[i]);
            let expected: Vec<&str> = (0..3).filter_map(pick).collect();
            let result = full_name(&parts(pick(0), pick(1), pick(2)));
            assert_eq!(result, expected.join(" "), "mask {mask:03b}");
        }
    }

    #[test]
    fn test_whitespace_only_is_kept() {
        assert_eq!(full_name(&parts(Some("Ada"), Some(" "), Some("Lovelace"))), "Ada   Lovelace");
    }

    #[test]
    fn test_display_matches_full_name() {
        let name = parts(Some("Grace"), None, Some("Hopper"));
        assert_eq!(name.to_string(), full_name(&name));
        assert_eq!(NameParts::default().to_string(), "");
        assert_eq!(name.full_name(), "Grace Hopper");
    }

    #[test]
    fn test_deterministic() {
        let name = parts(Some("Ada"), Some("King"), Some("Lovelace"));
        assert_eq!(full_name(&name), full_name(&name));
    }
}
