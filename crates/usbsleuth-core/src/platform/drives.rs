/// Volume queries using the Windows API.
///
/// Enumeration is a single `GetLogicalDrives` bitmask read; classification
/// and labels come from `GetDriveTypeW` and `GetVolumeInformationW` on the
/// drive root (`"E:\"`).
use super::{drive_type_from_raw, VolumeSource};
use crate::model::{DriveType, VolumeId, VolumeSnapshot};
use crate::{Result, UsbSleuthError};
use windows::core::PCWSTR;
use windows::Win32::Storage::FileSystem::{
    GetDriveTypeW, GetLogicalDrives, GetVolumeInformationW,
};

/// Size of the label and filesystem-name buffers (`MAX_PATH + 1`).
const NAME_BUFFER_LEN: usize = 261;

/// The live Windows volume query interface.
#[derive(Debug, Default)]
pub struct SystemVolumes;

impl SystemVolumes {
    pub fn new() -> Result<Self> {
        Ok(Self)
    }
}

/// Null-terminated UTF-16 root path for a volume, e.g. `"E:\\\0"`.
fn wide_root(id: &VolumeId) -> Vec<u16> {
    format!("{}\\", id.as_str())
        .encode_utf16()
        .chain(std::iter::once(0))
        .collect()
}

/// Decode a null-terminated UTF-16 buffer.
fn from_wide(buf: &[u16]) -> String {
    let len = buf.iter().position(|&c| c == 0).unwrap_or(buf.len());
    String::from_utf16_lossy(&buf[..len])
}

impl VolumeSource for SystemVolumes {
    fn list_volumes(&self) -> Result<VolumeSnapshot> {
        let mask = unsafe { GetLogicalDrives() };
        if mask == 0 {
            // Zero is the documented failure value; a live system always has
            // at least the boot volume assigned.
            let err = windows::core::Error::from_win32();
            return Err(UsbSleuthError::Enumeration(err.to_string()));
        }
        Ok(VolumeSnapshot::from_drive_mask(mask))
    }

    fn drive_type(&self, id: &VolumeId) -> Result<DriveType> {
        let root = wide_root(id);
        let raw = unsafe { GetDriveTypeW(PCWSTR(root.as_ptr())) };
        Ok(drive_type_from_raw(raw))
    }

    fn volume_label(&self, id: &VolumeId) -> Result<String> {
        let root = wide_root(id);
        let mut label_buf = [0u16; NAME_BUFFER_LEN];
        let mut fs_buf = [0u16; NAME_BUFFER_LEN];
        let mut serial_number: u32 = 0;
        let mut max_component_len: u32 = 0;
        let mut fs_flags: u32 = 0;

        unsafe {
            GetVolumeInformationW(
                PCWSTR(root.as_ptr()),
                Some(&mut label_buf),
                Some(&mut serial_number as *mut u32),
                Some(&mut max_component_len as *mut u32),
                Some(&mut fs_flags as *mut u32),
                Some(&mut fs_buf),
            )
        }
        .map_err(|e| UsbSleuthError::VolumeInfo {
            volume: id.to_string(),
            reason: e.to_string(),
        })?;

        tracing::debug!(
            volume = %id,
            filesystem = %from_wide(&fs_buf),
            serial = %format!("{serial_number:08X}"),
            "Volume information read"
        );

        Ok(from_wide(&label_buf))
    }
}
