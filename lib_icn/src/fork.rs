//! Reader for raw classic resource-fork byte streams, as saved by emulator
//! sidecar files. Only the structures needed to list and extract resources
//! are walked: header, map, type list, reference lists, name list.

use byteorder::{BigEndian, ByteOrder};
use log::debug;
use thiserror::Error;

/// Header and map-header sizes, in bytes.
const HEADER_LEN: usize = 16;
const MAP_HEADER_LEN: usize = 28;
const REF_ENTRY_LEN: usize = 12;

#[derive(Error, Debug)]
pub enum ForkError {
    #[error("resource fork is too small: {0} bytes")]
    TooSmall(usize),

    #[error("header offsets/lengths exceed file size")]
    HeaderOutOfRange,

    #[error("resource map is too small: {0} bytes")]
    MapTooSmall(usize),

    #[error("type list offset out of range")]
    TypeListOutOfRange,

    #[error("name list offset out of range")]
    NameListOutOfRange,

    #[error("truncated type list")]
    TruncatedTypeList,

    #[error("truncated reference list for type '{0}'")]
    TruncatedRefList(String),

    #[error("bad data offset for '{os_type}' ({id}): {offset}")]
    BadDataOffset {
        os_type: String,
        id: i16,
        offset: usize,
    },

    #[error("bad data length for '{os_type}' ({id}): {length}")]
    BadDataLength {
        os_type: String,
        id: i16,
        length: usize,
    },

    #[error("resource '{os_type}' ({id}) not found")]
    NotFound { os_type: String, id: i16 },
}

/// One resource in the fork. Offsets are into the data area, past the
/// length prefix.
#[derive(Debug)]
pub struct ResourceEntry {
    pub os_type: String,
    pub id: i16,
    pub name: String,
    pub attrs: u8,
    data_off: usize,
    data_len: usize,
}

impl ResourceEntry {
    pub fn len(&self) -> usize {
        self.data_len
    }

    pub fn is_empty(&self) -> bool {
        self.data_len == 0
    }
}

/// A parsed fork: the raw data area plus its directory, sorted by
/// (type, id).
pub struct ResourceFork {
    data_area: Vec<u8>,
    pub entries: Vec<ResourceEntry>,
}

impl ResourceFork {
    pub fn parse(blob: &[u8]) -> Result<ResourceFork, ForkError> {
        if blob.len() < HEADER_LEN {
            return Err(ForkError::TooSmall(blob.len()));
        }

        let data_off = BigEndian::read_u32(&blob[0..4]) as usize;
        let map_off = BigEndian::read_u32(&blob[4..8]) as usize;
        let data_len = BigEndian::read_u32(&blob[8..12]) as usize;
        let map_len = BigEndian::read_u32(&blob[12..16]) as usize;

        if data_off
            .checked_add(data_len)
            .map_or(true, |end| end > blob.len())
            || map_off
                .checked_add(map_len)
                .map_or(true, |end| end > blob.len())
        {
            return Err(ForkError::HeaderOutOfRange);
        }

        let data_area = &blob[data_off..data_off + data_len];
        let map_area = &blob[map_off..map_off + map_len];

        if map_area.len() < MAP_HEADER_LEN {
            return Err(ForkError::MapTooSmall(map_area.len()));
        }

        // Both offsets are relative to the start of the map. The name list
        // may legitimately be empty, with its offset equal to the map
        // length.
        let type_list_off = BigEndian::read_u16(&map_area[24..26]) as usize;
        let name_list_off = BigEndian::read_u16(&map_area[26..28]) as usize;

        if type_list_off >= map_area.len() {
            return Err(ForkError::TypeListOutOfRange);
        }
        if name_list_off > map_area.len() {
            return Err(ForkError::NameListOutOfRange);
        }
        let name_list_exists = name_list_off < map_area.len();

        if type_list_off + 2 > map_area.len() {
            return Err(ForkError::TruncatedTypeList);
        }
        let type_count = BigEndian::read_u16(&map_area[type_list_off..type_list_off + 2]) as usize + 1;
        let mut position = type_list_off + 2;

        let mut entries = Vec::new();

        for _ in 0..type_count {
            if position + 8 > map_area.len() {
                return Err(ForkError::TruncatedTypeList);
            }

            let os_type = os_type_string(&map_area[position..position + 4]);
            let resource_count =
                BigEndian::read_u16(&map_area[position + 4..position + 6]) as usize + 1;
            let ref_off = BigEndian::read_u16(&map_area[position + 6..position + 8]) as usize;
            position += 8;

            // The reference-list offset is relative to the type list.
            let mut ref_position = type_list_off + ref_off;

            for _ in 0..resource_count {
                if ref_position + REF_ENTRY_LEN > map_area.len() {
                    return Err(ForkError::TruncatedRefList(os_type));
                }
                let reference = &map_area[ref_position..ref_position + REF_ENTRY_LEN];
                ref_position += REF_ENTRY_LEN;

                let id = BigEndian::read_i16(&reference[0..2]);
                let name_off = BigEndian::read_i16(&reference[2..4]);
                let attrs = reference[4];
                let data_offset = ((reference[5] as usize) << 16)
                    | ((reference[6] as usize) << 8)
                    | reference[7] as usize;

                let name = if name_list_exists && name_off != -1 {
                    pascal_string(map_area, name_list_off + name_off as usize)
                } else {
                    String::new()
                };

                // Data area entries are [u32 length][bytes...].
                if data_offset + 4 > data_area.len() {
                    return Err(ForkError::BadDataOffset {
                        os_type,
                        id,
                        offset: data_offset,
                    });
                }
                let length =
                    BigEndian::read_u32(&data_area[data_offset..data_offset + 4]) as usize;
                let data_start = data_offset + 4;
                if data_start + length > data_area.len() {
                    return Err(ForkError::BadDataLength {
                        os_type,
                        id,
                        length,
                    });
                }

                entries.push(ResourceEntry {
                    os_type: os_type.clone(),
                    id,
                    name,
                    attrs,
                    data_off: data_start,
                    data_len: length,
                });
            }
        }

        entries.sort_by(|a, b| (a.os_type.as_str(), a.id).cmp(&(b.os_type.as_str(), b.id)));
        debug!("Parsed resource fork: {} entries", entries.len());

        Ok(ResourceFork {
            data_area: data_area.to_vec(),
            entries,
        })
    }

    pub fn payload(&self, entry: &ResourceEntry) -> &[u8] {
        &self.data_area[entry.data_off..entry.data_off + entry.data_len]
    }

    pub fn find(&self, os_type: &str, id: i16) -> Result<&ResourceEntry, ForkError> {
        self.entries
            .iter()
            .find(|entry| entry.os_type == os_type && entry.id == id)
            .ok_or_else(|| ForkError::NotFound {
                os_type: os_type.to_string(),
                id,
            })
    }
}

/// Renders a four-byte type code, substituting '.' for non-printable
/// bytes.
fn os_type_string(raw: &[u8]) -> String {
    raw.iter()
        .map(|&byte| {
            if (0x20..=0x7E).contains(&byte) {
                byte as char
            } else {
                '.'
            }
        })
        .collect()
}

/// Reads a length-prefixed name. Out-of-range offsets yield an empty
/// string, like a missing name.
fn pascal_string(map_area: &[u8], offset: usize) -> String {
    let Some(&length) = map_area.get(offset) else {
        return String::new();
    };
    let start = offset + 1;
    let end = start + length as usize;
    if end > map_area.len() {
        return String::new();
    }
    os_type_string(&map_area[start..end])
}
