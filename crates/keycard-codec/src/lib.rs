pub mod builder;
pub mod checksum;
pub mod codec;
pub mod layout;
pub mod pack;
pub mod readable;
pub mod record;
pub mod source;
pub mod unpack;
pub mod validation;

pub use builder::KeyRecordBuilder;
pub use codec::KeyCodec;
pub use record::KeyRecord;
pub use unpack::KeyFields;
pub use validation::{parse_building, parse_room, parse_timestamp, validate_id, validate_timestamp};
