use std::collections::BTreeMap;
use std::iter::FromIterator;

/// ## Read-only peripheral tape
///
/// Supplied before the run and addressed by the register.
/// Addresses past the end read as zero.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputTape {
    cells: Vec<u16>,
}

impl InputTape {
    pub fn new() -> InputTape {
        InputTape::default()
    }

    /// One cell per byte.
    pub fn from_bytes(bytes: &[u8]) -> InputTape {
        bytes.iter().map(|b| u16::from(*b)).collect()
    }

    /// One cell per UTF-16 code unit.
    pub fn from_text(text: &str) -> InputTape {
        text.encode_utf16().collect()
    }

    pub fn read(&self, addr: u16) -> u16 {
        self.cells.get(usize::from(addr)).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[u16] {
        &self.cells
    }
}

impl From<Vec<u16>> for InputTape {
    fn from(cells: Vec<u16>) -> InputTape {
        InputTape { cells }
    }
}

impl FromIterator<u16> for InputTape {
    fn from_iter<I: IntoIterator<Item = u16>>(iter: I) -> InputTape {
        InputTape {
            cells: iter.into_iter().collect(),
        }
    }
}

/// ## Write-only peripheral tape
///
/// A write replaces whatever was at the address before. Only addresses
/// that were written are surfaced; everything else reads as zero.
/// With journaling on, every write is also queued in order until drained
/// so a driver can stream output while the machine runs.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputTape {
    cells: BTreeMap<u16, u16>,
    journal: Option<Vec<(u16, u16)>>,
}

impl OutputTape {
    pub fn new() -> OutputTape {
        OutputTape::default()
    }

    pub fn with_journal() -> OutputTape {
        OutputTape {
            cells: BTreeMap::new(),
            journal: Some(vec![]),
        }
    }

    pub fn write(&mut self, addr: u16, value: u16) {
        self.cells.insert(addr, value);
        if let Some(journal) = &mut self.journal {
            journal.push((addr, value));
        }
    }

    pub fn read(&self, addr: u16) -> u16 {
        self.cells.get(&addr).copied().unwrap_or(0)
    }

    /// Written cells in ascending address order.
    pub fn iter(&self) -> impl Iterator<Item = (u16, u16)> + '_ {
        self.cells.iter().map(|(a, v)| (*a, *v))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Writes since the last drain, oldest first.
    /// Always empty when journaling is off.
    pub fn drain(&mut self) -> Vec<(u16, u16)> {
        match &mut self.journal {
            Some(journal) => std::mem::take(journal),
            None => vec![],
        }
    }

    pub fn clear(&mut self) {
        self.cells.clear();
        if let Some(journal) = &mut self.journal {
            journal.clear();
        }
    }
}
