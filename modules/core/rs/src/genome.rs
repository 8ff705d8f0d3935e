use ahash::AHashMap;
use eyre::{eyre, Result};

/// Contig lengths of the GRCm38 (mm10) mouse assembly.
pub const MM10: &[(&str, u64)] = &[
    ("chr1", 195_471_971),
    ("chr2", 182_113_224),
    ("chr3", 160_039_680),
    ("chr4", 156_508_116),
    ("chr5", 151_834_684),
    ("chr6", 149_736_546),
    ("chr7", 145_441_459),
    ("chr8", 129_401_213),
    ("chr9", 124_595_110),
    ("chr10", 130_694_993),
    ("chr11", 122_082_543),
    ("chr12", 120_129_022),
    ("chr13", 120_421_639),
    ("chr14", 124_902_244),
    ("chr15", 104_043_685),
    ("chr16", 98_207_768),
    ("chr17", 94_987_271),
    ("chr18", 90_702_639),
    ("chr19", 61_431_566),
    ("chrX", 171_031_299),
    ("chrY", 91_744_698),
    ("chrM", 16_299),
];

/// Known total lengths of genomic contigs.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct ContigSizes {
    sizes: AHashMap<String, u64>,
}

impl ContigSizes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mm10() -> Self {
        MM10.iter()
            .map(|(contig, length)| (contig.to_string(), *length))
            .collect()
    }

    pub fn insert(&mut self, contig: String, length: u64) -> Option<u64> {
        self.sizes.insert(contig, length)
    }

    /// Length of the contig. Contigs can be requested either with or without the `chr` prefix.
    pub fn get(&self, contig: &str) -> Result<u64> {
        if let Some(length) = self.sizes.get(contig) {
            return Ok(*length);
        }
        let alias = match contig.strip_prefix("chr") {
            Some(stripped) => stripped.to_string(),
            None => format!("chr{contig}"),
        };
        self.sizes
            .get(&alias)
            .copied()
            .ok_or_else(|| eyre!("Unknown contig: {contig}"))
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }
}

impl FromIterator<(String, u64)> for ContigSizes {
    fn from_iter<T: IntoIterator<Item = (String, u64)>>(iter: T) -> Self {
        Self {
            sizes: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mm10_lookup() -> Result<()> {
        let sizes = ContigSizes::mm10();
        assert_eq!(sizes.len(), MM10.len());
        assert_eq!(sizes.get("chr19")?, 61_431_566);
        assert_eq!(sizes.get("19")?, 61_431_566);
        assert_eq!(sizes.get("X")?, 171_031_299);
        assert!(sizes.get("chr23").is_err());
        Ok(())
    }

    #[test]
    fn test_custom_sizes() -> Result<()> {
        let mut sizes = ContigSizes::new();
        assert!(sizes.is_empty());
        assert_eq!(sizes.insert("scaffold_1".to_string(), 1200), None);
        assert_eq!(sizes.insert("scaffold_1".to_string(), 1300), Some(1200));
        assert_eq!(sizes.get("scaffold_1")?, 1300);
        assert!(sizes.get("scaffold_2").is_err());
        Ok(())
    }
}
