//! Flash geometry model and sector-aligned write planning.
//!
//! A flash map describes the physical erase-block layout of a target
//! chip: an ordered, non-overlapping list of sectors, possibly with gaps.
//! The planner splits an arbitrary `[start, end)` range into spans that
//! never cross a sector boundary, so erase and program operations stay
//! aligned with what the hardware can actually do.

use std::fmt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FlashError {
    #[error(
        "Address 0x{addr:08X} is not mapped to any sector ({covered} of {requested} bytes covered)"
    )]
    UnmappedAddress {
        addr: u32,
        covered: u32,
        requested: u32,
    },
}

/// One erasable flash sector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlashSector {
    /// Sector index (0-N usually).
    pub index: u16,
    /// Start address of this sector.
    pub start: u32,
    /// Size of this sector in bytes.
    pub size: u32,
}

impl FlashSector {
    pub const fn new(index: u16, start: u32, size: u32) -> Self {
        Self { index, start, size }
    }

    /// One past the last address of this sector.
    pub const fn end(&self) -> u32 {
        self.start + self.size
    }

    /// Whether `addr` falls inside this sector.
    pub const fn contains(&self, addr: u32) -> bool {
        addr >= self.start && addr < self.end()
    }
}

impl fmt::Display for FlashSector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FlashSector[Index={}, Start=0x{:08x}, End=0x{:08x}]",
            self.index,
            self.start,
            self.end()
        )
    }
}

/// Ordered, non-overlapping sector list. Gaps are allowed; an unmapped
/// address is a defined failure case.
pub type FlashMap = Vec<FlashSector>;

/// Find the sector containing `addr`. Linear scan; sector counts are
/// small.
pub fn sector_at(map: &[FlashSector], addr: u32) -> Option<&FlashSector> {
    map.iter().find(|sec| sec.contains(addr))
}

/// Build a layout where every sector has the same size.
pub fn uniform_layout(start_addr: u32, sector_size: u32, sectors: u16) -> FlashMap {
    (0..sectors)
        .map(|x| FlashSector::new(x, start_addr + sector_size * x as u32, sector_size))
        .collect()
}

/// STM32F40X / STM32F41X memory organization.
pub const STM32F40X: [FlashSector; 12] = [
    FlashSector::new(0, 0x08000000, 0x4000), /* 16k */
    FlashSector::new(1, 0x08004000, 0x4000),
    FlashSector::new(2, 0x08008000, 0x4000),
    FlashSector::new(3, 0x0800c000, 0x4000),
    FlashSector::new(4, 0x08010000, 0x10000), /* 64k */
    FlashSector::new(5, 0x08020000, 0x20000), /* 128k */
    FlashSector::new(6, 0x08040000, 0x20000),
    FlashSector::new(7, 0x08060000, 0x20000),
    FlashSector::new(8, 0x08080000, 0x20000),
    FlashSector::new(9, 0x080a0000, 0x20000),
    FlashSector::new(10, 0x080c0000, 0x20000),
    FlashSector::new(11, 0x080e0000, 0x20000),
];

/// Winbond W25Q128JV SPI flash (16MB), 256 uniform 64k blocks.
/// Used in: DM1701, (others?)
pub fn w25q128jv() -> FlashMap {
    uniform_layout(0x00, 0x10000, 0x100)
}

/// Micron M25P16 SPI flash (2MB), 32 uniform 64k sectors.
pub fn m25p16() -> FlashMap {
    uniform_layout(0x00, 0x10000, 0x20)
}

/// Invoke `op(addr, len, sector)` over `[start, end)` in sector-aligned
/// spans.
///
/// The emitted spans exactly cover the range with no overlap and no gap.
/// Walking into an unmapped address is an error reporting how much of the
/// range was covered before the gap; errors from `op` propagate and stop
/// the walk.
pub fn aligned_walk<E, F>(
    map: &[FlashSector],
    start: u32,
    end: u32,
    mut op: F,
) -> Result<(), E>
where
    E: From<FlashError>,
    F: FnMut(u32, u32, &FlashSector) -> Result<(), E>,
{
    let mut addr = start;
    while addr < end {
        let sector = sector_at(map, addr).ok_or(FlashError::UnmappedAddress {
            addr,
            covered: addr - start,
            requested: end - start,
        })?;
        let n_bytes = end.min(sector.end()) - addr;
        op(addr, n_bytes, sector)?;
        addr += n_bytes;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sector_bounds() {
        let sec = FlashSector::new(3, 0x0800c000, 0x4000);
        assert_eq!(sec.end(), 0x08010000);
        assert!(sec.contains(0x0800c000));
        assert!(sec.contains(0x0800ffff));
        assert!(!sec.contains(0x08010000));
        assert!(!sec.contains(0x0800bfff));
    }

    #[test]
    fn test_sector_at_unique() {
        // Any mapped address resolves to exactly one sector containing it.
        for addr in [0x08000000u32, 0x08004000, 0x0801ffff, 0x080e0000] {
            let hits: Vec<_> = STM32F40X.iter().filter(|s| s.contains(addr)).collect();
            assert_eq!(hits.len(), 1);
            assert_eq!(sector_at(&STM32F40X, addr), Some(hits[0]));
        }
        assert_eq!(sector_at(&STM32F40X, 0x07ffffff), None);
        assert_eq!(sector_at(&STM32F40X, 0x08100000), None);
    }

    #[test]
    fn test_uniform_layout() {
        let map = uniform_layout(0x1000, 0x100, 4);
        assert_eq!(map.len(), 4);
        assert_eq!(map[0].start, 0x1000);
        assert_eq!(map[3].start, 0x1300);
        assert_eq!(map[3].end(), 0x1400);
    }

    #[test]
    fn test_spi_part_layouts() {
        let w25 = w25q128jv();
        assert_eq!(w25.len(), 256);
        assert_eq!(w25.last().unwrap().end(), 0x0100_0000);

        let m25 = m25p16();
        assert_eq!(m25.len(), 32);
        assert_eq!(m25.last().unwrap().end(), 0x0020_0000);
        assert!(sector_at(&m25, 0x001f_ffff).is_some());
        assert!(sector_at(&m25, 0x0020_0000).is_none());
    }

    #[test]
    fn test_aligned_walk_exact_coverage() {
        // Range spanning the 16k sectors into the 64k sector.
        let start = 0x08002000;
        let end = 0x08012000;
        let mut spans: Vec<(u32, u32, u16)> = Vec::new();

        aligned_walk::<FlashError, _>(&STM32F40X, start, end, |addr, len, sec| {
            spans.push((addr, len, sec.index));
            Ok(())
        })
        .unwrap();

        assert_eq!(
            spans,
            vec![
                (0x08002000, 0x2000, 0),
                (0x08004000, 0x4000, 1),
                (0x08008000, 0x4000, 2),
                (0x0800c000, 0x4000, 3),
                (0x08010000, 0x2000, 4),
            ]
        );

        // No overlap, no gap.
        let mut expect = start;
        for (addr, len, _) in &spans {
            assert_eq!(*addr, expect);
            expect += len;
        }
        assert_eq!(expect, end);
    }

    #[test]
    fn test_aligned_walk_reports_gap() {
        // Two sectors with a hole between them.
        let map = vec![
            FlashSector::new(0, 0x0000, 0x100),
            FlashSector::new(1, 0x0200, 0x100),
        ];

        let err = aligned_walk::<FlashError, _>(&map, 0x0000, 0x0300, |_, _, _| Ok(()))
            .unwrap_err();
        match err {
            FlashError::UnmappedAddress {
                addr,
                covered,
                requested,
            } => {
                assert_eq!(addr, 0x0100);
                assert_eq!(covered, 0x100);
                assert_eq!(requested, 0x300);
            }
        }
    }

    #[test]
    fn test_aligned_walk_propagates_op_error() {
        let mut calls = 0;
        let res = aligned_walk(&STM32F40X, 0x08000000, 0x08008000, |_, _, _| {
            calls += 1;
            if calls == 2 {
                Err(FlashError::UnmappedAddress {
                    addr: 0,
                    covered: 0,
                    requested: 0,
                })
            } else {
                Ok(())
            }
        });
        assert!(res.is_err());
        assert_eq!(calls, 2);
    }
}
