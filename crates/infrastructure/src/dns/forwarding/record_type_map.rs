//! Mapping between `dnsproxy_domain::RecordType` and `hickory_proto::rr::RecordType`.
//!
//! Both sides are total over the 16-bit type code, so the conversion never
//! drops a question type.

use dnsproxy_domain::RecordType;
use hickory_proto::rr::RecordType as HickoryRecordType;

pub struct RecordTypeMapper;

impl RecordTypeMapper {
    /// Domain type → hickory type (for building upstream queries)
    pub fn to_hickory(record_type: &RecordType) -> HickoryRecordType {
        HickoryRecordType::from(record_type.to_u16())
    }

    /// Hickory type → domain type (for incoming questions)
    pub fn from_hickory(hickory_type: HickoryRecordType) -> RecordType {
        RecordType::from_u16(u16::from(hickory_type))
    }
}
