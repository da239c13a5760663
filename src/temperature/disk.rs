use std::path::Path;
use sysinfo::Disks;

/// Reports the free space available for writing into a directory.
pub trait SpaceProbe {
    /// Free bytes on the volume holding `dir`, or `None` when unknown.
    fn available_space(&self, dir: &Path) -> Option<u64>;
}

/// Probe backed by the host's mounted disks.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemDisks;

impl SpaceProbe for SystemDisks {
    fn available_space(&self, dir: &Path) -> Option<u64> {
        let dir = dir.canonicalize().ok()?;
        let disks = Disks::new_with_refreshed_list();
        disks
            .list()
            .iter()
            .filter(|disk| dir.starts_with(disk.mount_point()))
            .max_by_key(|disk| disk.mount_point().as_os_str().len())
            .map(|disk| disk.available_space())
    }
}

/// Probe that always reports the same amount; handy for tests and dry runs.
#[derive(Debug, Clone, Copy)]
pub struct FixedSpace(pub Option<u64>);

impl SpaceProbe for FixedSpace {
    fn available_space(&self, _dir: &Path) -> Option<u64> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_disks_report_space_for_temp_dir() {
        let dir = std::env::temp_dir();
        match SystemDisks.available_space(&dir) {
            Some(available) => assert!(available > 0, "no free space reported for {dir:?}"),
            None => eprintln!("no mounted disk covers {dir:?}, skipping"),
        }
    }

    #[test]
    fn missing_directory_has_unknown_space() {
        assert_eq!(SystemDisks.available_space(Path::new("/no/such/dir")), None);
    }
}
