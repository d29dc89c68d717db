//! Field-by-field reports of packed records

use openmsg_core::{ArrayCharacter, Attributes, ByteOrder, EndianWrapper, MemoryWrapper, Scalar};
use serde::Serialize;

/// One field of a record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldReport {
    /// Field name, with an index for array elements
    pub name: String,
    /// Byte offset in the record
    pub offset: usize,
    /// Size in bytes
    pub size: usize,
    /// Scalar category, or "text"
    pub kind: &'static str,
    /// Stored bytes, hex encoded
    pub bytes: String,
    /// Host value as text
    pub value: String,
    /// Null sentinel in stored order, hex encoded (optional fields only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub null: Option<String>,
    /// Field is optional and holds the sentinel
    pub not_set: bool,
    /// Value lies in the declared bounds
    pub in_bound: bool,
}

/// Accumulates field reports at increasing offsets
#[derive(Debug, Default)]
pub struct RecordReport {
    offset: usize,
    fields: Vec<FieldReport>,
}

impl RecordReport {
    /// Start an empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Report a numeric field
    pub fn scalar<A: Attributes, E: ByteOrder, W: MemoryWrapper>(
        &mut self,
        name: impl Into<String>,
        field: &EndianWrapper<A, E, W>,
    ) -> &mut Self {
        let null = if A::IS_OPTIONAL {
            Some(hex::encode(E::ORDER.encode(A::NULL)))
        } else {
            None
        };
        let not_set = field.is_not_set();
        let value = if not_set {
            "null".to_string()
        } else {
            format!("{:?}", field.get())
        };
        self.push(FieldReport {
            name: name.into(),
            offset: self.offset,
            size: field.as_bytes().len(),
            kind: <A::Value as Scalar>::CATEGORY.name(),
            bytes: hex::encode(field.as_bytes()),
            value,
            null,
            not_set,
            in_bound: field.in_bound(),
        })
    }

    /// Report each element of an array of numeric fields
    pub fn scalars<A: Attributes, E: ByteOrder, W: MemoryWrapper>(
        &mut self,
        name: &str,
        fields: &[EndianWrapper<A, E, W>],
    ) -> &mut Self {
        for (i, field) in fields.iter().enumerate() {
            self.scalar(format!("{}[{}]", name, i), field);
        }
        self
    }

    /// Report a text field
    pub fn text<const N: usize, const Z: bool>(
        &mut self,
        name: impl Into<String>,
        field: &ArrayCharacter<N, Z>,
    ) -> &mut Self {
        let view = field.view();
        self.push(FieldReport {
            name: name.into(),
            offset: self.offset,
            size: N,
            kind: "text",
            bytes: hex::encode(field.as_bytes()),
            value: String::from_utf8_lossy(view).into_owned(),
            null: None,
            not_set: field.empty(),
            in_bound: true,
        })
    }

    fn push(&mut self, field: FieldReport) -> &mut Self {
        self.offset += field.size;
        self.fields.push(field);
        self
    }

    /// Total size of the reported fields
    pub fn size(&self) -> usize {
        self.offset
    }

    /// Finished list of fields
    pub fn finish(self) -> Vec<FieldReport> {
        self.fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use openmsg_core::{ArrayChar, Be, Le, Optionull};

    #[test]
    fn test_offsets_accumulate() {
        let mut report = RecordReport::new();
        report
            .scalar("a", &Be::<u16>::new(0x0102))
            .scalars("b", &[Le::<Optionull<u32>>::default(); 2])
            .text("c", &ArrayChar::<5>::from_str("hi"));
        assert_eq!(report.size(), 2 + 8 + 5);

        let fields = report.finish();
        assert_eq!(fields.len(), 4);
        assert_eq!(fields[0].bytes, "0102");
        assert_eq!(fields[0].value, "258");
        assert_eq!(fields[0].null, None);
        assert_eq!(fields[1].name, "b[0]");
        assert_eq!(fields[1].offset, 2);
        assert!(fields[1].not_set);
        assert_eq!(fields[1].value, "null");
        assert_eq!(fields[1].null.as_deref(), Some("ffffffff"));
        assert_eq!(fields[2].offset, 6);
        assert_eq!(fields[3].kind, "text");
        assert_eq!(fields[3].value, "hi");
    }
}
