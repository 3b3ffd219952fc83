/// Platform-specific functionality — the OS volume query seam.
///
/// [`VolumeSource`] is the only thing the monitor knows about the OS. The
/// Windows implementation lives in [`drives`]; on every other target
/// [`SystemVolumes::new`] fails so the binary aborts before entering the loop.
pub mod console;
#[cfg(windows)]
pub mod drives;

use crate::model::{DriveType, VolumeId, VolumeSnapshot};
use crate::Result;
use std::path::PathBuf;

#[cfg(windows)]
pub use drives::SystemVolumes;

// Drive type constants from the Windows API (`GetDriveTypeW`).
const DRIVE_NO_ROOT_DIR_VAL: u32 = 1;
const DRIVE_REMOVABLE_VAL: u32 = 2;
const DRIVE_FIXED_VAL: u32 = 3;
const DRIVE_REMOTE_VAL: u32 = 4;
const DRIVE_CDROM_VAL: u32 = 5;
const DRIVE_RAMDISK_VAL: u32 = 6;

/// The three OS queries the monitor makes, plus where a volume's root lives.
///
/// Every query is fallible; callers pick their own recovery policy.
pub trait VolumeSource {
    /// All currently mounted volume identifiers, in one OS call.
    fn list_volumes(&self) -> Result<VolumeSnapshot>;

    /// Drive-type classification of one volume.
    fn drive_type(&self, id: &VolumeId) -> Result<DriveType>;

    /// Volume label of one volume (may legitimately be empty).
    fn volume_label(&self, id: &VolumeId) -> Result<String>;

    /// Directory whose top level is listed when the volume is inserted.
    fn root_path(&self, id: &VolumeId) -> PathBuf {
        id.root()
    }
}

/// Map a raw `GetDriveTypeW` return value onto [`DriveType`].
pub fn drive_type_from_raw(raw: u32) -> DriveType {
    match raw {
        DRIVE_REMOVABLE_VAL => DriveType::Removable,
        DRIVE_FIXED_VAL => DriveType::Fixed,
        DRIVE_REMOTE_VAL => DriveType::Network,
        DRIVE_CDROM_VAL => DriveType::CdRom,
        DRIVE_RAMDISK_VAL => DriveType::RamDisk,
        DRIVE_NO_ROOT_DIR_VAL => DriveType::NoRootDir,
        _ => DriveType::Unknown,
    }
}

/// Placeholder on targets without an OS volume query implementation.
#[cfg(not(windows))]
#[derive(Debug)]
pub struct SystemVolumes {
    _private: (),
}

#[cfg(not(windows))]
impl SystemVolumes {
    /// Always fails: there is no volume query interface on this target.
    pub fn new() -> Result<Self> {
        Err(crate::UsbSleuthError::UnsupportedPlatform(
            std::env::consts::OS,
        ))
    }
}

#[cfg(not(windows))]
impl VolumeSource for SystemVolumes {
    fn list_volumes(&self) -> Result<VolumeSnapshot> {
        Err(crate::UsbSleuthError::UnsupportedPlatform(
            std::env::consts::OS,
        ))
    }

    fn drive_type(&self, _id: &VolumeId) -> Result<DriveType> {
        Err(crate::UsbSleuthError::UnsupportedPlatform(
            std::env::consts::OS,
        ))
    }

    fn volume_label(&self, _id: &VolumeId) -> Result<String> {
        Err(crate::UsbSleuthError::UnsupportedPlatform(
            std::env::consts::OS,
        ))
    }
}
