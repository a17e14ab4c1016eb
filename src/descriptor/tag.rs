/// ISO/IEC 13818-1
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Tag {
    VideoStream,
    AudioStream,
    Hierarchy,
    Registration,
    DataStreamAlignment,
    TargetBackgroundGrid,
    VideoWindow,
    CA,
    ISO639,
    SystemClock,
    MultiplexBufferUtilization,
    Copyright,
    MaximumBitrate,
    PrivateDataIndicator,
    SmoothingBuffer,
    STD,
    IBP,

    /// ETSI EN 300 468
    DVB(TagDVB),

    /// 0x00, 0x01, 0x13...0x3F
    Reserved(u8),

    /// 0x80...0xFF user private
    Other(u8),
}

/// ETSI EN 300 468 V1.15.1
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TagDVB {
    NetworkName,
    ServiceList,
    Stuffing,
    SatelliteDeliverySystem,
    CableDeliverySystem,
    VBIData,
    VBITeletext,
    BouquetName,
    Service,
    CountryAvailability,
    Linkage,
    NVODReference,
    TimeShiftedService,
    ShortEvent,
    ExtendedEvent,
    TimeShiftedEvent,
    Component,
    Mosaic,
    StreamIdentifier,
    CAIdentifier,
    Content,
    ParentalRating,
    Teletext,
    Telephone,
    LocalTimeOffset,
    Subtitling,
    TerrestrialDeliverySystem,
    MultilingualNetworkName,
    MultilingualBouquetName,
    MultilingualServiceName,
    MultilingualComponent,
    PrivateDataSpecifier,
    ServiceMove,
    ShortSmoothingBuffer,
    FrequencyList,
    PartialTransportStream,
    DataBroadcast,
    Scrambling,
    DataBroadcastID,
    TransportStream,
    DSNG,
    PDC,
    AC3,
    AncillaryData,
    CellList,
    CellFrequencyLink,
    AnnouncementSupport,
    ApplicationSignalling,
    AdaptationFieldData,
    ServiceIdentifier,
    ServiceAvailability,
    DefaultAuthority,
    RelatedContent,
    TVAID,
    ContentIdentifier,
    TimeSliceFECIdentifier,
    ECMRepetitionRate,
    S2SatelliteDeliverySystem,
    EnhancedAC3,
    DTS,
    AAC,
    XAITLocation,
    FTAContentManagement,
    Extension,

    /// 0x40...0x7F not listed above
    Reserved(u8),
}

impl Tag {
    #[inline(always)]
    pub fn is_dvb(self) -> bool {
        match self {
            Tag::DVB(..) => true,
            _ => false,
        }
    }

    #[inline(always)]
    pub fn is_dvb_country_availability(self) -> bool {
        match self {
            Tag::DVB(TagDVB::CountryAvailability) => true,
            _ => false,
        }
    }
}

impl From<u8> for Tag {
    fn from(d: u8) -> Self {
        match d {
            0x02 => Tag::VideoStream,
            0x03 => Tag::AudioStream,
            0x04 => Tag::Hierarchy,
            0x05 => Tag::Registration,
            0x06 => Tag::DataStreamAlignment,
            0x07 => Tag::TargetBackgroundGrid,
            0x08 => Tag::VideoWindow,
            0x09 => Tag::CA,
            0x0A => Tag::ISO639,
            0x0B => Tag::SystemClock,
            0x0C => Tag::MultiplexBufferUtilization,
            0x0D => Tag::Copyright,
            0x0E => Tag::MaximumBitrate,
            0x0F => Tag::PrivateDataIndicator,
            0x10 => Tag::SmoothingBuffer,
            0x11 => Tag::STD,
            0x12 => Tag::IBP,

            0x40..=0x7F => Tag::DVB(TagDVB::from(d)),

            0x00 | 0x01 | 0x13..=0x3F => Tag::Reserved(d),

            0x80..=0xFF => Tag::Other(d),
        }
    }
}

impl From<Tag> for u8 {
    fn from(t: Tag) -> u8 {
        match t {
            Tag::VideoStream => 0x02,
            Tag::AudioStream => 0x03,
            Tag::Hierarchy => 0x04,
            Tag::Registration => 0x05,
            Tag::DataStreamAlignment => 0x06,
            Tag::TargetBackgroundGrid => 0x07,
            Tag::VideoWindow => 0x08,
            Tag::CA => 0x09,
            Tag::ISO639 => 0x0A,
            Tag::SystemClock => 0x0B,
            Tag::MultiplexBufferUtilization => 0x0C,
            Tag::Copyright => 0x0D,
            Tag::MaximumBitrate => 0x0E,
            Tag::PrivateDataIndicator => 0x0F,
            Tag::SmoothingBuffer => 0x10,
            Tag::STD => 0x11,
            Tag::IBP => 0x12,

            Tag::DVB(dvb) => u8::from(dvb),

            Tag::Reserved(d) | Tag::Other(d) => d,
        }
    }
}

const DVB_TAGS: [TagDVB; 64] = [
    TagDVB::NetworkName,               // 0x40
    TagDVB::ServiceList,               // 0x41
    TagDVB::Stuffing,                  // 0x42
    TagDVB::SatelliteDeliverySystem,   // 0x43
    TagDVB::CableDeliverySystem,       // 0x44
    TagDVB::VBIData,                   // 0x45
    TagDVB::VBITeletext,               // 0x46
    TagDVB::BouquetName,               // 0x47
    TagDVB::Service,                   // 0x48
    TagDVB::CountryAvailability,       // 0x49
    TagDVB::Linkage,                   // 0x4A
    TagDVB::NVODReference,             // 0x4B
    TagDVB::TimeShiftedService,        // 0x4C
    TagDVB::ShortEvent,                // 0x4D
    TagDVB::ExtendedEvent,             // 0x4E
    TagDVB::TimeShiftedEvent,          // 0x4F
    TagDVB::Component,                 // 0x50
    TagDVB::Mosaic,                    // 0x51
    TagDVB::StreamIdentifier,          // 0x52
    TagDVB::CAIdentifier,              // 0x53
    TagDVB::Content,                   // 0x54
    TagDVB::ParentalRating,            // 0x55
    TagDVB::Teletext,                  // 0x56
    TagDVB::Telephone,                 // 0x57
    TagDVB::LocalTimeOffset,           // 0x58
    TagDVB::Subtitling,                // 0x59
    TagDVB::TerrestrialDeliverySystem, // 0x5A
    TagDVB::MultilingualNetworkName,   // 0x5B
    TagDVB::MultilingualBouquetName,   // 0x5C
    TagDVB::MultilingualServiceName,   // 0x5D
    TagDVB::MultilingualComponent,     // 0x5E
    TagDVB::PrivateDataSpecifier,      // 0x5F
    TagDVB::ServiceMove,               // 0x60
    TagDVB::ShortSmoothingBuffer,      // 0x61
    TagDVB::FrequencyList,             // 0x62
    TagDVB::PartialTransportStream,    // 0x63
    TagDVB::DataBroadcast,             // 0x64
    TagDVB::Scrambling,                // 0x65
    TagDVB::DataBroadcastID,           // 0x66
    TagDVB::TransportStream,           // 0x67
    TagDVB::DSNG,                      // 0x68
    TagDVB::PDC,                       // 0x69
    TagDVB::AC3,                       // 0x6A
    TagDVB::AncillaryData,             // 0x6B
    TagDVB::CellList,                  // 0x6C
    TagDVB::CellFrequencyLink,         // 0x6D
    TagDVB::AnnouncementSupport,       // 0x6E
    TagDVB::ApplicationSignalling,     // 0x6F
    TagDVB::AdaptationFieldData,       // 0x70
    TagDVB::ServiceIdentifier,         // 0x71
    TagDVB::ServiceAvailability,       // 0x72
    TagDVB::DefaultAuthority,          // 0x73
    TagDVB::RelatedContent,            // 0x74
    TagDVB::TVAID,                     // 0x75
    TagDVB::ContentIdentifier,         // 0x76
    TagDVB::TimeSliceFECIdentifier,    // 0x77
    TagDVB::ECMRepetitionRate,         // 0x78
    TagDVB::S2SatelliteDeliverySystem, // 0x79
    TagDVB::EnhancedAC3,               // 0x7A
    TagDVB::DTS,                       // 0x7B
    TagDVB::AAC,                       // 0x7C
    TagDVB::XAITLocation,              // 0x7D
    TagDVB::FTAContentManagement,      // 0x7E
    TagDVB::Extension,                 // 0x7F
];

impl From<u8> for TagDVB {
    fn from(d: u8) -> Self {
        match d {
            0x40..=0x7F => DVB_TAGS[usize::from(d - 0x40)],
            _ => TagDVB::Reserved(d),
        }
    }
}

impl From<TagDVB> for u8 {
    fn from(t: TagDVB) -> u8 {
        if let TagDVB::Reserved(d) = t {
            return d;
        }

        DVB_TAGS
            .iter()
            .position(|&v| v == t)
            .map(|i| 0x40 + i as u8)
            .unwrap_or(0xFF)
    }
}

#[cfg(test)]
mod tests {
    use super::{Tag, TagDVB};

    #[test]
    fn from_u8() {
        assert_eq!(Tag::from(0x0A), Tag::ISO639);
        assert_eq!(Tag::from(0x49), Tag::DVB(TagDVB::CountryAvailability));
        assert_eq!(Tag::from(0x48), Tag::DVB(TagDVB::Service));
        assert_eq!(Tag::from(0x7F), Tag::DVB(TagDVB::Extension));
        assert_eq!(Tag::from(0x20), Tag::Reserved(0x20));
        assert_eq!(Tag::from(0xF0), Tag::Other(0xF0));
    }

    #[test]
    fn into_u8() {
        assert_eq!(u8::from(Tag::DVB(TagDVB::CountryAvailability)), 0x49);
        assert_eq!(u8::from(Tag::DVB(TagDVB::FTAContentManagement)), 0x7E);
        assert_eq!(u8::from(Tag::Other(0x90)), 0x90);
    }

    #[test]
    fn predicates() {
        assert!(Tag::from(0x49).is_dvb_country_availability());
        assert!(Tag::from(0x4D).is_dvb());
        assert!(!Tag::from(0x0A).is_dvb());
    }
}
