use std::fmt;

use crate::esr_code::EsrCode;

const SEPARATOR: &str = "\n----\n";

/// Scanned codes, newest first.
#[derive(Debug, Clone, Default)]
pub struct ScanHistory {
    scans: Vec<EsrCode>,
}

impl ScanHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, scan: EsrCode) -> &EsrCode {
        self.scans.insert(0, scan);
        &self.scans[0]
    }

    pub fn len(&self) -> usize {
        self.scans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scans.is_empty()
    }

    pub fn clear(&mut self) {
        self.scans.clear();
    }

    pub fn get(&self, index: usize) -> Option<&EsrCode> {
        self.scans.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut EsrCode> {
        self.scans.get_mut(index)
    }

    /// The most recent scan.
    pub fn latest(&self) -> Option<&EsrCode> {
        self.scans.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EsrCode> {
        self.scans.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut EsrCode> {
        self.scans.iter_mut()
    }

    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ScanHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, scan) in self.scans.iter().enumerate() {
            if i > 0 {
                f.write_str(SEPARATOR)?;
            }
            write!(f, "{scan}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::ScanHistory;
    use crate::parser::parse;

    #[test]
    fn newest_first() {
        let mut history = ScanHistory::new();
        assert!(history.is_empty());
        assert_eq!(history.latest(), None);

        history.add(parse("042>210000000003139471430009017+ 010001456>").unwrap());
        history.add(parse("0100003949753>120000000000234478943216899+ 010001628>").unwrap());

        assert_eq!(history.len(), 2);
        assert_eq!(
            history.latest().map(|scan| scan.account_number().render()),
            Some("01-162-8".to_string())
        );
        assert_eq!(
            history.get(1).map(|scan| scan.account_number().render()),
            Some("01-145-6".to_string())
        );
        assert_eq!(history.get(2), None);

        history.clear();
        assert!(history.is_empty());
    }

    #[test]
    fn render_joins_scans() {
        let mut history = ScanHistory::new();
        assert_eq!(history.render(), "");

        history.add(parse("042>210000000003139471430009017+ 010001456>").unwrap());
        history.add(parse("0100003949753>120000000000234478943216899+ 010001628>").unwrap());
        assert_eq!(
            history.render(),
            "Reference number: 12 00000 00000 23447 89432 16899\n\
             Account number: 01-162-8\n\
             Amount: CHF 3949.75\n\
             ----\n\
             Reference number: 21 00000 00003 13947 14300 09017\n\
             Account number: 01-145-6"
        );
    }

    #[test]
    fn mark_transmitted_in_place() {
        let mut history = ScanHistory::new();
        history.add(parse("042>210000000003139471430009017+ 010001456>").unwrap());
        if let Some(scan) = history.get_mut(0) {
            scan.mark_transmitted();
        }
        assert!(history.iter().all(|scan| scan.is_transmitted()));
    }
}
