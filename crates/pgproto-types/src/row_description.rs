use crate::error::TypeError;
use crate::scan::PayloadScanner;

/// Description of one result column, from a RowDescription frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Column name.
    pub name: String,
    /// OID of the originating table, or 0 when not a table column.
    pub table_oid: u32,
    /// Attribute number within that table, or 0.
    pub attribute_number: i16,
    /// OID of the column's data type.
    pub type_oid: u32,
    /// Data type size; negative means variable-width.
    pub type_size: i16,
    /// Type modifier (type-specific, e.g. varchar length).
    pub type_modifier: i32,
    /// Format code: 0 = text, 1 = binary.
    pub format_code: i16,
}

/// RowDescription (`'T'`) — the shape of the rows that follow.
///
/// Payload layout:
///
/// ```text
/// ┌──────────────────┬────────────────────────────┐
/// │ field count      │ 2-byte BE                  │
/// │ per field:       │                            │
/// │   name           │ null-terminated string     │
/// │   table OID      │ 4-byte BE                  │
/// │   attribute no.  │ 2-byte BE                  │
/// │   type OID       │ 4-byte BE                  │
/// │   type size      │ 2-byte BE signed           │
/// │   type modifier  │ 4-byte BE                  │
/// │   format code    │ 2-byte BE                  │
/// └──────────────────┴────────────────────────────┘
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowDescription {
    /// Field descriptors in wire order.
    pub fields: Vec<FieldDescriptor>,
}

impl RowDescription {
    /// Decode a RowDescription payload, preserving field order.
    ///
    /// # Errors
    ///
    /// Any [`TypeError`] from the scanner if a descriptor is truncated or
    /// a name is malformed.
    pub fn decode(payload: &[u8]) -> Result<Self, TypeError> {
        let mut scan = PayloadScanner::new(payload);
        let count = scan.u16()?;

        let mut fields = Vec::with_capacity(usize::from(count));
        for _ in 0..count {
            fields.push(FieldDescriptor {
                name: scan.cstr()?.to_owned(),
                table_oid: scan.u32()?,
                attribute_number: scan.i16()?,
                type_oid: scan.u32()?,
                type_size: scan.i16()?,
                type_modifier: scan.i32()?,
                format_code: scan.i16()?,
            });
        }

        Ok(Self { fields })
    }
}
