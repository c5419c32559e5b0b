//! Conversion between `ironzone_domain::RecordType` and hickory's record type,
//! going through the shared numeric wire code.

use hickory_proto::rr::RecordType as HickoryRecordType;
use ironzone_domain::RecordType;

pub struct RecordTypeMapper;

impl RecordTypeMapper {
    pub fn to_hickory(record_type: &RecordType) -> HickoryRecordType {
        HickoryRecordType::from(record_type.to_u16())
    }

    /// Returns `None` for types the resolver does not serve.
    pub fn from_hickory(hickory_type: HickoryRecordType) -> Option<RecordType> {
        RecordType::from_u16(u16::from(hickory_type))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_maps_to_its_hickory_type() {
        assert_eq!(RecordTypeMapper::to_hickory(&RecordType::A), HickoryRecordType::A);
        assert_eq!(RecordTypeMapper::to_hickory(&RecordType::MX), HickoryRecordType::MX);
        assert_eq!(RecordTypeMapper::to_hickory(&RecordType::SOA), HickoryRecordType::SOA);

        for rt in RecordType::ALL {
            let hickory = RecordTypeMapper::to_hickory(&rt);
            assert_eq!(RecordTypeMapper::from_hickory(hickory), Some(rt), "{:?}", rt);
        }
    }

    #[test]
    fn test_unsupported_type_returns_none() {
        assert!(RecordTypeMapper::from_hickory(HickoryRecordType::ANY).is_none());
        assert!(RecordTypeMapper::from_hickory(HickoryRecordType::SRV).is_none());
    }
}
