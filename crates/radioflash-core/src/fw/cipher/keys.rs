//! Per-model XOR keystreams, 1024 bytes each.
//!
//! The same table decrypts and encrypts; selection is by radio model
//! through the registry in [`super`].

pub(super) static UV3X0: [u8; 1024] = [
    0xb4, 0x81, 0xe0, 0x64, 0xe9, 0xf8, 0x1b, 0x58, 0x94, 0xef, 0x12, 0x38, 0x2b, 0x01, 0x88, 0x16,
    0x6b, 0xa4, 0x9c, 0xa5, 0x18, 0x09, 0x1d, 0xcb, 0x0f, 0xb5, 0x00, 0x83, 0x0a, 0xe4, 0x11, 0x9f,
    0xcc, 0xef, 0xbf, 0x43, 0x9f, 0x7f, 0x5d, 0xd1, 0x11, 0x7b, 0xe9, 0x5f, 0x77, 0x43, 0xea, 0x30,
    0xce, 0xbc, 0xbe, 0xbf, 0x8c, 0x2c, 0x2d, 0x20, 0x3a, 0x7a, 0x47, 0x87, 0x38, 0xc7, 0x39, 0xd8,
    0x9a, 0x2a, 0xb9, 0x00, 0xdc, 0xee, 0x6c, 0xc6, 0x9b, 0x7a, 0x08, 0x84, 0x79, 0x54, 0xf4, 0xf7,
    0x0f, 0xb7, 0xdc, 0x73, 0x73, 0x24, 0x7d, 0x52, 0xbf, 0x85, 0x91, 0x84, 0xf4, 0xd8, 0xc2, 0x8e,
    0x27, 0xe7, 0xac, 0xd4, 0xdf, 0xcf, 0x46, 0xac, 0x7b, 0x73, 0xc5, 0xb6, 0x6e, 0xf0, 0x6d, 0x6b,
    0xf5, 0x17, 0xd7, 0xe3, 0x97, 0x95, 0x1e, 0x45, 0xb3, 0x3c, 0x45, 0xb2, 0xb2, 0x1f, 0xd0, 0x68,
    0xed, 0x3a, 0xac, 0xe2, 0x38, 0xe2, 0xe2, 0x01, 0xbf, 0xba, 0x6f, 0xca, 0x2c, 0x10, 0xbd, 0x1c,
    0x87, 0x49, 0x18, 0xee, 0xd5, 0x8e, 0xff, 0x0c, 0x59, 0xd5, 0x51, 0x54, 0x1b, 0xac, 0x4d, 0x02,
    0xa3, 0xb7, 0x98, 0xe6, 0xc0, 0x4d, 0x38, 0xd7, 0x25, 0xfe, 0xc3, 0x0c, 0x29, 0xa6, 0x8f, 0xca,
    0x85, 0xba, 0x6d, 0x23, 0xca, 0xf8, 0xeb, 0xe1, 0x3c, 0x7b, 0xda, 0x21, 0x66, 0xb2, 0x1e, 0x78,
    0xb8, 0xc7, 0xa0, 0xcb, 0xec, 0x2a, 0x33, 0x5f, 0xaa, 0xeb, 0x6f, 0x4f, 0xf2, 0x4e, 0xdf, 0xf4,
    0x2b, 0xcd, 0xdf, 0x29, 0xb0, 0x07, 0x07, 0x3c, 0xb5, 0xf5, 0x78, 0x64, 0x35, 0x0e, 0xbe, 0x91,
    0x19, 0x25, 0x88, 0x01, 0xa3, 0xe7, 0x48, 0x65, 0xbe, 0x75, 0xf8, 0xc5, 0xe2, 0x50, 0x01, 0x6d,
    0x6c, 0x7b, 0xe1, 0x1a, 0x37, 0x16, 0x3f, 0xc2, 0x7c, 0xa6, 0xcc, 0x60, 0x28, 0xc2, 0xd8, 0x80,
    0xa3, 0x48, 0x32, 0x41, 0x4c, 0x3d, 0x90, 0x45, 0x73, 0x68, 0x48, 0xf4, 0xeb, 0xff, 0xc0, 0x20,
    0xad, 0x37, 0x23, 0x13, 0x4b, 0x17, 0x3a, 0x44, 0x00, 0xc9, 0xc9, 0xfd, 0x7a, 0x01, 0x7c, 0x58,
    0x98, 0x0b, 0xe9, 0x0a, 0xa1, 0xf8, 0x52, 0x5f, 0xf2, 0x97, 0x49, 0xaf, 0x32, 0x82, 0x12, 0x18,
    0xf3, 0x70, 0xd7, 0xbe, 0x76, 0x87, 0xd7, 0x46, 0xf6, 0xcc, 0x79, 0xaa, 0x2f, 0xb8, 0x9b, 0xa5,
    0xab, 0x3f, 0xa4, 0xdf, 0x35, 0x13, 0xb7, 0x34, 0xf7, 0x84, 0x3f, 0xef, 0xa2, 0x0f, 0x97, 0x95,
    0x96, 0xcb, 0xac, 0x17, 0xb3, 0xce, 0x9e, 0x3e, 0xa8, 0x61, 0x28, 0x3c, 0xf2, 0x0c, 0x60, 0x43,
    0xcd, 0xb2, 0xe3, 0x8e, 0xd5, 0x63, 0x4f, 0xe4, 0xa4, 0x24, 0x5c, 0x2b, 0x2e, 0x11, 0x6e, 0x4b,
    0x22, 0xed, 0x16, 0xb7, 0xbf, 0x2a, 0xfe, 0x92, 0xa7, 0x85, 0xf4, 0xb7, 0x63, 0x26, 0xc7, 0x80,
    0xc0, 0xc7, 0x4d, 0x2c, 0x35, 0x02, 0x56, 0x37, 0x34, 0xad, 0xb3, 0xe8, 0x3e, 0x2b, 0xf3, 0xe2,
    0x0e, 0x82, 0x08, 0xf9, 0x19, 0x12, 0xf5, 0x4a, 0x40, 0x15, 0x1f, 0x44, 0x83, 0x33, 0x15, 0xfa,
    0x55, 0x6a, 0xf7, 0xd3, 0x16, 0x84, 0x01, 0xee, 0x2c, 0x15, 0xc7, 0x18, 0xd0, 0xb2, 0xf8, 0x8a,
    0xef, 0x70, 0xe0, 0x1d, 0x17, 0x65, 0x5c, 0x5b, 0x95, 0xdb, 0x62, 0x16, 0x55, 0x55, 0xd9, 0x63,
    0xf9, 0xd0, 0xce, 0x54, 0x14, 0x03, 0x3f, 0xd8, 0xf7, 0xf0, 0x32, 0x0b, 0x11, 0x24, 0xe4, 0xca,
    0x93, 0xe5, 0x2c, 0x4e, 0x4b, 0x97, 0xfa, 0x70, 0xcf, 0x2b, 0x62, 0x63, 0x1f, 0xeb, 0xd8, 0xd5,
    0x6a, 0x42, 0x9a, 0x9a, 0x16, 0xe5, 0x60, 0x1f, 0x6c, 0x3d, 0x94, 0xf3, 0x68, 0xec, 0x61, 0xfb,
    0x31, 0xd7, 0x5a, 0x8f, 0x8f, 0x92, 0x07, 0xcf, 0x5d, 0x0d, 0xe6, 0x5e, 0xd0, 0x3e, 0x5e, 0x4a,
    0x51, 0x62, 0x78, 0x86, 0xe4, 0x2e, 0xf1, 0xcf, 0x15, 0xe3, 0x89, 0xc7, 0xae, 0xaf, 0xca, 0xb5,
    0xf3, 0x7b, 0x08, 0xc1, 0xd6, 0xed, 0xe7, 0xe2, 0x4e, 0x5d, 0xe7, 0x2e, 0x37, 0x82, 0x72, 0x37,
    0x40, 0x01, 0x75, 0x67, 0x28, 0x5b, 0x70, 0x95, 0xed, 0x88, 0xc3, 0x52, 0xf8, 0x02, 0x5f, 0x80,
    0x91, 0x47, 0xc6, 0x59, 0x9f, 0x60, 0x8d, 0xee, 0x89, 0x36, 0x2d, 0x1f, 0xe0, 0x2b, 0x7d, 0x91,
    0xb1, 0x32, 0xb6, 0xa1, 0x40, 0x44, 0x2c, 0x96, 0x11, 0xbe, 0xf5, 0x2a, 0xca, 0x1a, 0x06, 0x11,
    0xa2, 0xb4, 0x40, 0xf1, 0xf3, 0xec, 0xb7, 0xe7, 0xa4, 0xe3, 0x61, 0xaf, 0x24, 0xd4, 0x28, 0x9d,
    0x95, 0x31, 0x2e, 0x1c, 0xe5, 0x4f, 0x37, 0x22, 0xfb, 0xed, 0x9e, 0x23, 0xb1, 0x15, 0x1f, 0x0e,
    0x3e, 0x42, 0x8f, 0xbe, 0xa2, 0xc3, 0x71, 0xf9, 0x76, 0xa6, 0xc4, 0x8d, 0xcd, 0x72, 0x54, 0x25,
    0x2c, 0x82, 0xb3, 0x9e, 0xce, 0x4a, 0x87, 0x60, 0x3f, 0xea, 0xe7, 0x54, 0xce, 0xb4, 0xbf, 0xb7,
    0x94, 0xf5, 0x91, 0x2c, 0xf8, 0x1c, 0x5f, 0x4a, 0xff, 0x98, 0x02, 0xd9, 0x32, 0x5c, 0x63, 0x18,
    0x3d, 0x89, 0xcd, 0x6b, 0xa6, 0x03, 0xc4, 0xef, 0xab, 0x4e, 0x71, 0xa9, 0x62, 0x29, 0x77, 0x1d,
    0x5b, 0x3b, 0xab, 0xe1, 0xba, 0xc6, 0xfd, 0x8f, 0x1e, 0x16, 0xb3, 0x8d, 0xcc, 0x04, 0xb6, 0x65,
    0x18, 0x8f, 0x4a, 0x9c, 0xb0, 0x41, 0x47, 0xb6, 0xed, 0x30, 0x37, 0x5e, 0x90, 0x3e, 0xfe, 0x77,
    0xc5, 0x79, 0x74, 0x4f, 0x82, 0xca, 0xbf, 0x92, 0x81, 0x4d, 0x35, 0xe8, 0x7d, 0x7f, 0xf9, 0x1a,
    0x03, 0xd3, 0x73, 0x9a, 0x1a, 0x45, 0xd1, 0x31, 0x6f, 0x2c, 0x8f, 0x75, 0xd6, 0xd3, 0x38, 0x64,
    0x9a, 0x9c, 0x42, 0x63, 0x08, 0xcd, 0x8c, 0x6c, 0x9a, 0x21, 0xb6, 0x37, 0x47, 0x5a, 0xfc, 0x70,
    0x98, 0x07, 0x1a, 0xac, 0xe1, 0x2f, 0x3a, 0x58, 0x1f, 0x24, 0x9a, 0x78, 0xdf, 0x8a, 0x87, 0xa0,
    0x01, 0x4a, 0x7c, 0xa6, 0xf5, 0xea, 0x45, 0x90, 0x0a, 0x7d, 0x61, 0xdb, 0x1b, 0x6c, 0x33, 0x99,
    0x79, 0xc1, 0x76, 0xd0, 0xee, 0xab, 0x45, 0x05, 0xaa, 0x12, 0x7e, 0x18, 0x0a, 0xe3, 0xdd, 0x86,
    0x08, 0x9f, 0x0e, 0xf1, 0x90, 0x9a, 0x48, 0x9e, 0xf0, 0x1e, 0xc4, 0xc1, 0x7f, 0xcc, 0x31, 0xb8,
    0x4c, 0xf6, 0xef, 0xd8, 0xf4, 0x81, 0x06, 0x01, 0x3c, 0x2a, 0x8b, 0x0e, 0x78, 0x87, 0x09, 0xea,
    0x1c, 0x35, 0x7b, 0xca, 0xef, 0x7e, 0x20, 0x9a, 0x8a, 0x5d, 0x3d, 0x5f, 0x20, 0xb2, 0x58, 0xea,
    0xee, 0xf7, 0xa6, 0xc6, 0x23, 0x2f, 0x1b, 0xa4, 0xa4, 0x29, 0x21, 0x40, 0x55, 0x54, 0x84, 0x60,
    0x79, 0x36, 0x94, 0x8a, 0x2f, 0xd0, 0x67, 0x67, 0x45, 0xcf, 0xa6, 0xa5, 0x68, 0xeb, 0xe8, 0x8a,
    0x8e, 0x9b, 0x9a, 0x6a, 0x60, 0xad, 0xf2, 0x7b, 0x37, 0x7f, 0x4f, 0x8d, 0x81, 0x49, 0x84, 0x6d,
    0xb9, 0xcb, 0x66, 0x85, 0x71, 0xcb, 0x78, 0xf4, 0x88, 0xaa, 0x4b, 0xf8, 0xce, 0x78, 0x45, 0x96,
    0x3f, 0x35, 0xfb, 0x1b, 0x8a, 0x6f, 0x3e, 0x65, 0xf9, 0xea, 0x61, 0x5b, 0x17, 0x80, 0x60, 0x7b,
    0xbd, 0x80, 0xe3, 0x70, 0x48, 0x7c, 0x36, 0x1a, 0x65, 0x92, 0x59, 0xba, 0x13, 0x63, 0x1c, 0x36,
    0x32, 0xc3, 0x10, 0x03, 0x6c, 0x81, 0x0c, 0x67, 0x4d, 0xc3, 0xd0, 0x51, 0x91, 0x38, 0x09, 0x27,
    0x76, 0x48, 0x68, 0x75, 0x0a, 0x24, 0x04, 0xfd, 0x7e, 0x91, 0x58, 0x02, 0xfa, 0xb1, 0xbf, 0x37,
    0x9a, 0x82, 0xaa, 0xac, 0x69, 0x67, 0x2a, 0x96, 0x0d, 0xaf, 0x3a, 0x15, 0x98, 0x2e, 0x46, 0x05,
    0xca, 0x4f, 0x20, 0x0e, 0x12, 0x2a, 0x72, 0x27, 0x03, 0x08, 0x9c, 0x02, 0x62, 0xb0, 0x94, 0x3a,
];

pub(super) static MD9600: [u8; 1024] = [
    0xa2, 0xfa, 0xbb, 0x4b, 0x90, 0x8f, 0x17, 0x20, 0x96, 0x36, 0x43, 0x84, 0xf7, 0xac, 0x4e, 0x55,
    0xea, 0xe5, 0xb4, 0x36, 0x55, 0xb9, 0x39, 0xe2, 0xd8, 0xda, 0x18, 0xc0, 0x0d, 0x09, 0x5d, 0xb8,
    0x0e, 0x89, 0x90, 0x46, 0x38, 0xd4, 0x93, 0xcc, 0x2f, 0x8e, 0xcd, 0x2d, 0x22, 0xb7, 0x89, 0x97,
    0x51, 0x24, 0x98, 0xa0, 0xcc, 0x30, 0x3e, 0x95, 0x7d, 0xaf, 0x4c, 0x0e, 0x68, 0x23, 0x89, 0xc6,
    0x32, 0x33, 0x56, 0xaa, 0xe0, 0x58, 0x92, 0x30, 0xe2, 0xda, 0xbc, 0xea, 0x50, 0xfb, 0x57, 0x5b,
    0x73, 0x71, 0x93, 0x09, 0x87, 0x1a, 0x29, 0xd3, 0xbf, 0xec, 0x87, 0x85, 0x8a, 0x2b, 0x2d, 0xaa,
    0x15, 0xde, 0x57, 0xa2, 0x11, 0x83, 0xdc, 0xf4, 0xb6, 0x02, 0x56, 0xe5, 0x08, 0xe0, 0x83, 0x49,
    0x59, 0xb5, 0xeb, 0x99, 0x0f, 0xe0, 0xc3, 0x46, 0xa7, 0x79, 0x12, 0x4d, 0xfa, 0x87, 0x12, 0x0c,
    0xbf, 0x73, 0xd9, 0x53, 0x52, 0xbd, 0x38, 0xbf, 0xb4, 0xee, 0xe4, 0x43, 0xd2, 0xce, 0xd3, 0x08,
    0x0a, 0xd6, 0xe9, 0x77, 0xeb, 0xe8, 0xd4, 0x94, 0x3c, 0x3e, 0x35, 0x8d, 0x40, 0xa1, 0x00, 0x92,
    0x39, 0xdb, 0x25, 0xe8, 0x2b, 0x6e, 0x70, 0x39, 0xe2, 0x86, 0xad, 0x2f, 0x36, 0x2d, 0x11, 0x41,
    0x8e, 0xbe, 0xd5, 0xcc, 0xa3, 0x9c, 0x24, 0x65, 0x87, 0x23, 0x37, 0x6e, 0xe5, 0xdf, 0xbf, 0xe7,
    0x8a, 0xfc, 0x83, 0x87, 0x24, 0xfe, 0x4a, 0x0b, 0x4a, 0xb3, 0xfb, 0xcf, 0xbd, 0x65, 0x03, 0x9b,
    0xee, 0x53, 0xf7, 0xbf, 0xc0, 0x63, 0x7a, 0x62, 0x8e, 0x11, 0x62, 0x17, 0x70, 0xab, 0x16, 0xb1,
    0xba, 0xc0, 0x3a, 0x59, 0xc6, 0xd6, 0x8f, 0xdd, 0xf4, 0x5b, 0x14, 0x4b, 0xee, 0xde, 0x72, 0xbf,
    0x31, 0x7f, 0x96, 0x79, 0xc9, 0xa4, 0xa0, 0x32, 0x5b, 0xee, 0xfc, 0xb0, 0x69, 0x6c, 0xce, 0x99,
    0xd2, 0x0e, 0x94, 0x85, 0x98, 0x5c, 0x07, 0x56, 0xe6, 0x67, 0x41, 0xcc, 0x52, 0x00, 0x25, 0x54,
    0x5f, 0x29, 0xfc, 0x21, 0x46, 0xc9, 0x5c, 0x7e, 0xf6, 0xa4, 0x4e, 0x63, 0x59, 0x89, 0xaf, 0x46,
    0xd9, 0xcd, 0xd7, 0x33, 0x23, 0xf9, 0x79, 0x1f, 0x2a, 0xc0, 0xca, 0x7a, 0x6f, 0x34, 0xe6, 0x03,
    0x81, 0x39, 0x6f, 0xe0, 0xbf, 0x39, 0x77, 0xee, 0x65, 0x19, 0xa0, 0x56, 0xc7, 0x6c, 0x81, 0x61,
    0xd7, 0xe7, 0x4c, 0x8d, 0xed, 0x15, 0xae, 0xe0, 0xc8, 0x4c, 0xf7, 0x7c, 0xd0, 0xe0, 0x7b, 0x74,
    0x9d, 0x96, 0x38, 0xde, 0xbd, 0x5c, 0xb9, 0x29, 0xb2, 0x37, 0x3a, 0xb1, 0x3b, 0x7c, 0x0c, 0x91,
    0xd5, 0x43, 0x3b, 0xb8, 0x80, 0x19, 0x6f, 0x40, 0xc6, 0xf5, 0x10, 0xfb, 0xfa, 0x6e, 0xad, 0x4e,
    0xbe, 0x2a, 0x9f, 0x42, 0xc7, 0x9a, 0xe9, 0xd8, 0xe5, 0xe4, 0x63, 0x9d, 0x3d, 0x21, 0x18, 0x7f,
    0xd9, 0xc9, 0xec, 0xdf, 0x64, 0x6b, 0x82, 0xe7, 0x2e, 0xa2, 0x5c, 0x1e, 0x77, 0x44, 0x44, 0x39,
    0xe9, 0xdc, 0xeb, 0x35, 0x66, 0x5b, 0xd1, 0xa2, 0x04, 0x0a, 0x64, 0x42, 0x56, 0xc3, 0x6c, 0xd2,
    0xee, 0x61, 0xa6, 0x28, 0x1f, 0x75, 0xaf, 0x7e, 0x08, 0x3b, 0x24, 0x0e, 0xcd, 0xcc, 0x08, 0xdf,
    0x28, 0x94, 0x66, 0xde, 0x21, 0x07, 0x37, 0x30, 0x19, 0x90, 0x85, 0xc7, 0x0d, 0xca, 0xd1, 0x33,
    0x19, 0xf3, 0xb3, 0xbb, 0x3b, 0x9e, 0xc0, 0xad, 0x5a, 0xa7, 0xb0, 0xf2, 0x87, 0x6c, 0xc1, 0xe5,
    0x82, 0x3a, 0x56, 0x66, 0x80, 0x06, 0xe4, 0x29, 0x2b, 0x5e, 0x0e, 0x54, 0xeb, 0x9f, 0x0f, 0x4a,
    0x64, 0x67, 0x59, 0xc1, 0x40, 0x4d, 0x7b, 0x1b, 0x2e, 0xd0, 0x48, 0xf3, 0x2a, 0x8e, 0x36, 0xf6,
    0x00, 0xb7, 0x04, 0xf4, 0x0b, 0xc0, 0xa0, 0x36, 0x43, 0x5c, 0x47, 0x13, 0x77, 0xa8, 0xee, 0xbe,
    0xd6, 0xa5, 0xe1, 0x62, 0xb4, 0xec, 0xaa, 0x71, 0x8b, 0x9d, 0x34, 0x39, 0x40, 0x99, 0x30, 0xb8,
    0xa8, 0xf1, 0xb8, 0xb1, 0x4b, 0x9e, 0x32, 0xff, 0x68, 0x72, 0x78, 0x2a, 0x39, 0x4e, 0x36, 0x38,
    0x77, 0x96, 0x93, 0xc5, 0x21, 0xe2, 0x13, 0x56, 0x7a, 0xf6, 0xbb, 0xeb, 0x51, 0xf5, 0x77, 0xd3,
    0x84, 0xd1, 0xba, 0xc4, 0xc7, 0x06, 0x64, 0x2b, 0xa2, 0x88, 0xe8, 0xc1, 0xb9, 0xf9, 0xae, 0x5f,
    0x50, 0x20, 0xb6, 0x13, 0x0e, 0x97, 0x7f, 0x73, 0x01, 0xc3, 0x27, 0x31, 0xe3, 0x09, 0xd3, 0xf0,
    0x9c, 0x3f, 0x51, 0x56, 0x07, 0x61, 0xfc, 0x63, 0xf9, 0x86, 0xe0, 0x01, 0x80, 0x12, 0x1f, 0xdc,
    0x68, 0x2c, 0x94, 0x73, 0x04, 0x73, 0xb5, 0x70, 0x2b, 0xec, 0xbe, 0x34, 0x80, 0x3f, 0x0c, 0xb7,
    0xf6, 0x24, 0xc6, 0x8f, 0x94, 0x18, 0xc3, 0x4e, 0x76, 0x54, 0xa8, 0x11, 0x15, 0xff, 0x51, 0x56,
    0xc8, 0xa3, 0x73, 0x0e, 0x8a, 0xde, 0x7f, 0xf4, 0xfd, 0x5a, 0xc9, 0x1c, 0xaf, 0xfe, 0xe9, 0xcf,
    0x9c, 0x66, 0x61, 0x96, 0xf5, 0x91, 0x81, 0x95, 0x20, 0xda, 0x88, 0x1a, 0x00, 0x2a, 0x0c, 0x76,
    0x76, 0x6b, 0x9c, 0x0c, 0x28, 0x40, 0xa3, 0xa7, 0x81, 0xf3, 0x8f, 0x11, 0xf9, 0xaf, 0x33, 0xe1,
    0x96, 0xef, 0x6a, 0x94, 0xb2, 0x36, 0xfe, 0xdf, 0x00, 0x01, 0xc8, 0x44, 0xca, 0xf9, 0x18, 0xe4,
    0x7c, 0x6e, 0x57, 0x94, 0x66, 0x01, 0xea, 0x32, 0xbe, 0xa0, 0x5a, 0x3a, 0xe4, 0xb8, 0xb2, 0x94,
    0xea, 0xa5, 0x29, 0xb0, 0x54, 0x6e, 0x01, 0xd5, 0x1c, 0xaf, 0xaf, 0xb6, 0xfa, 0xd6, 0x3c, 0x47,
    0xe2, 0x92, 0xeb, 0xce, 0xcd, 0x89, 0x1c, 0x3d, 0xbc, 0x4a, 0x70, 0xbf, 0xfa, 0x82, 0x2e, 0x91,
    0xa2, 0x72, 0xe6, 0x13, 0x62, 0xa0, 0x54, 0x1f, 0x7e, 0xcd, 0x86, 0x99, 0x18, 0x28, 0x41, 0x47,
    0xae, 0xc1, 0xa2, 0xe3, 0xe4, 0x40, 0x01, 0x6f, 0x84, 0xd7, 0x1a, 0xc9, 0xc3, 0x75, 0x6f, 0x7f,
    0xc6, 0x3d, 0xe8, 0xe4, 0x64, 0x36, 0xbd, 0x64, 0x2e, 0x44, 0x95, 0x14, 0xac, 0x57, 0xf0, 0x8d,
    0xea, 0xe2, 0xc2, 0xfb, 0x33, 0x8f, 0x60, 0x71, 0x1d, 0x31, 0xa0, 0x80, 0xc6, 0xf9, 0x3c, 0x07,
    0x5c, 0xee, 0x78, 0x4c, 0xe3, 0x97, 0x05, 0x4c, 0x32, 0xfa, 0x24, 0x50, 0x3f, 0xcb, 0x0f, 0xc1,
    0x9d, 0xdd, 0x94, 0x3d, 0x43, 0xdc, 0x03, 0xea, 0x8f, 0x3e, 0x4a, 0x0b, 0x8b, 0x77, 0x5f, 0xd1,
    0x6e, 0x6c, 0xde, 0x73, 0x66, 0x2b, 0xf4, 0x81, 0x94, 0xd9, 0x7b, 0x75, 0x58, 0xeb, 0x66, 0x8b,
    0xd0, 0x9a, 0x60, 0xd2, 0x9b, 0x90, 0xb0, 0x83, 0xe3, 0xe8, 0x60, 0x92, 0x9a, 0x55, 0x9e, 0x84,
    0x03, 0xa1, 0x62, 0x80, 0x75, 0x5a, 0x51, 0xa8, 0x5c, 0xc8, 0xe2, 0xaa, 0x80, 0x21, 0xbf, 0x91,
    0x8a, 0x00, 0x6e, 0xe2, 0xc4, 0x14, 0x30, 0xe4, 0x20, 0x15, 0x29, 0x3f, 0x7c, 0xfd, 0xc2, 0xc8,
    0x24, 0x74, 0x4c, 0x9c, 0x98, 0x8c, 0xe6, 0x6c, 0x90, 0xae, 0xa0, 0x17, 0x3e, 0xd5, 0xe0, 0x7e,
    0xd3, 0xf9, 0x05, 0x94, 0x44, 0xcf, 0x4b, 0xb4, 0x4e, 0xaf, 0xee, 0x38, 0xb8, 0xd5, 0x93, 0x47,
    0xd8, 0xcd, 0xe3, 0xee, 0x58, 0x29, 0x79, 0x72, 0x3a, 0x75, 0xfe, 0xe5, 0x1a, 0x6d, 0x92, 0xf8,
    0xb3, 0x6d, 0x6e, 0x10, 0xa5, 0x28, 0xc8, 0x9c, 0x76, 0x9d, 0xf7, 0xa5, 0xd6, 0x47, 0xd8, 0xa6,
    0x27, 0x94, 0x70, 0x9f, 0x3c, 0x99, 0xd3, 0x65, 0x61, 0x04, 0x44, 0x3c, 0x9c, 0x52, 0x9d, 0xa7,
    0x33, 0x42, 0xf2, 0x7f, 0x6e, 0x89, 0x71, 0x43, 0x9e, 0xc7, 0x8c, 0xaf, 0x5e, 0xba, 0x5b, 0x90,
    0x19, 0xb1, 0x3b, 0xd6, 0xcd, 0x44, 0xbc, 0xeb, 0x0e, 0x43, 0xba, 0x43, 0x4d, 0xec, 0xc9, 0x35,
];

pub(super) static DM1701: [u8; 1024] = [
    0x0b, 0xf1, 0x74, 0xa7, 0xa4, 0xaf, 0x83, 0x53, 0xdb, 0x7a, 0x96, 0x8a, 0x89, 0x94, 0x0a, 0x9e,
    0xd3, 0x14, 0x9e, 0xdb, 0x7c, 0xee, 0x38, 0x2f, 0x55, 0x37, 0xfa, 0xc0, 0xb7, 0xfb, 0x9f, 0xdd,
    0xfa, 0xb4, 0x17, 0x12, 0xdb, 0x74, 0x5f, 0x57, 0x51, 0x6f, 0x80, 0x52, 0x2a, 0x85, 0xb6, 0x63,
    0xab, 0x6c, 0xa5, 0x11, 0x89, 0xb7, 0x6e, 0xb8, 0xf0, 0xc7, 0x5a, 0xad, 0xfd, 0x6c, 0x23, 0xcf,
    0x07, 0xca, 0xcb, 0x93, 0x52, 0xa5, 0xe8, 0x63, 0xd9, 0x60, 0x0e, 0x4f, 0xd2, 0xd1, 0x13, 0x97,
    0xfd, 0x3f, 0x53, 0x1d, 0x36, 0x56, 0x86, 0x7f, 0x22, 0xe6, 0xa0, 0xbc, 0x6e, 0x8e, 0xd1, 0xf8,
    0x77, 0xf4, 0x7b, 0x88, 0xc3, 0x92, 0x0c, 0xdb, 0xe3, 0x7c, 0x91, 0x13, 0x89, 0x03, 0x67, 0x53,
    0x31, 0xf1, 0x84, 0x48, 0x17, 0x1e, 0x8a, 0x22, 0x33, 0x4d, 0xb0, 0xfe, 0x9e, 0x9a, 0xdd, 0x82,
    0x90, 0x35, 0x4c, 0x63, 0x32, 0xda, 0xe1, 0xc1, 0x1c, 0x9b, 0xe5, 0x12, 0x22, 0x88, 0xa6, 0xad,
    0xfd, 0x2a, 0xc6, 0xb4, 0x39, 0x6d, 0xad, 0xad, 0x8a, 0xaf, 0xb5, 0xdb, 0x39, 0xc7, 0x89, 0x04,
    0x6c, 0xa9, 0x59, 0x2d, 0x2b, 0xca, 0x74, 0xf2, 0x0f, 0xde, 0x99, 0x9b, 0xc6, 0x69, 0x49, 0x43,
    0x16, 0xfe, 0x48, 0x06, 0xcd, 0xef, 0xd7, 0x3e, 0xc2, 0xc4, 0x39, 0x7d, 0x2c, 0x22, 0x75, 0x4d,
    0x4f, 0x14, 0x06, 0x09, 0x43, 0xf2, 0x03, 0x8c, 0xc6, 0x3b, 0x71, 0x23, 0x38, 0xfd, 0x74, 0xf5,
    0x19, 0x03, 0xc7, 0x5b, 0xeb, 0x35, 0xaa, 0x16, 0x76, 0xa1, 0x3c, 0x07, 0x28, 0x95, 0x82, 0x06,
    0x56, 0xb6, 0x43, 0xda, 0x30, 0x17, 0xa6, 0x63, 0x3a, 0x17, 0x98, 0xae, 0xa1, 0xb7, 0xc7, 0xd2,
    0x9e, 0x40, 0xb0, 0x55, 0x6e, 0x26, 0x25, 0xec, 0xb1, 0x76, 0x00, 0x1c, 0x54, 0x99, 0x71, 0x7e,
    0xb2, 0x3c, 0x11, 0x46, 0x9b, 0xf0, 0xab, 0xe0, 0x43, 0x13, 0x8d, 0xcb, 0x79, 0x52, 0x70, 0x74,
    0x24, 0xe6, 0x31, 0xda, 0x0e, 0x79, 0xb1, 0x58, 0x69, 0x2a, 0xa7, 0x85, 0xe7, 0x75, 0x2d, 0x70,
    0x73, 0xed, 0x91, 0x71, 0x05, 0x1a, 0xc6, 0x1d, 0x5f, 0x93, 0x66, 0x5f, 0x77, 0xa5, 0xc3, 0x5e,
    0xfe, 0xe1, 0x27, 0xcb, 0xfa, 0x36, 0x8b, 0xdd, 0x4f, 0xe1, 0x0d, 0xd2, 0x83, 0x3d, 0xe7, 0xd1,
    0xe9, 0xce, 0x81, 0x22, 0x90, 0x54, 0x23, 0x45, 0xe2, 0x03, 0xc5, 0xf3, 0xa6, 0xe9, 0x3f, 0x05,
    0xc1, 0x96, 0xfe, 0x2d, 0xb0, 0x6f, 0x51, 0x32, 0x56, 0xe5, 0x7d, 0xb2, 0xab, 0x7f, 0xdd, 0x53,
    0xd2, 0x65, 0x9f, 0x3d, 0x2d, 0x17, 0x53, 0x53, 0x9d, 0x77, 0x8f, 0x6d, 0x3e, 0x86, 0x4b, 0x11,
    0x2c, 0xb7, 0x2a, 0xdc, 0xbc, 0x5c, 0x52, 0x2d, 0x2d, 0xb0, 0xb9, 0x5f, 0x35, 0xf7, 0xec, 0xfe,
    0x27, 0xaa, 0x58, 0xec, 0x5b, 0x3c, 0xf9, 0x3f, 0x44, 0x47, 0x90, 0x8f, 0x3d, 0x81, 0xbe, 0x6e,
    0x0b, 0x06, 0x8e, 0x97, 0xd7, 0x4d, 0x1d, 0xd0, 0x28, 0x98, 0xbd, 0xd6, 0x2f, 0xe5, 0x29, 0x84,
    0x20, 0x3b, 0x4a, 0x61, 0xc0, 0xab, 0xbe, 0xbe, 0x32, 0xc3, 0x69, 0xc8, 0xd7, 0x29, 0xb2, 0x6c,
    0x73, 0xe2, 0x1d, 0x68, 0x3a, 0xa3, 0x50, 0xa3, 0x1d, 0xe8, 0x8f, 0x3c, 0xe3, 0x53, 0x1a, 0xa2,
    0x6d, 0x82, 0x66, 0x2c, 0x78, 0x1a, 0x7c, 0x90, 0xc4, 0x7b, 0x1e, 0xd2, 0x24, 0xc1, 0x47, 0xf7,
    0x37, 0xa8, 0x91, 0xa6, 0xb3, 0x0e, 0xfb, 0x43, 0x0f, 0x89, 0xfd, 0x09, 0xb1, 0xa4, 0x31, 0xaf,
    0x64, 0xeb, 0x19, 0x7f, 0x6a, 0xf6, 0x95, 0xa4, 0x70, 0x7e, 0xae, 0x43, 0x76, 0x4a, 0x5f, 0x0a,
    0x0d, 0xff, 0x14, 0xab, 0x8b, 0x2b, 0xe1, 0xa5, 0x2b, 0xb2, 0xad, 0x18, 0x70, 0x6b, 0x81, 0x5e,
    0x1c, 0x99, 0x90, 0xdb, 0x41, 0xca, 0x00, 0xde, 0x31, 0x47, 0xa0, 0xf5, 0xc8, 0x28, 0xd9, 0x97,
    0x08, 0x42, 0xe7, 0xc7, 0x9a, 0xa6, 0x5f, 0xda, 0xf0, 0xf2, 0x24, 0x94, 0x10, 0x46, 0x29, 0xa5,
    0xb6, 0x78, 0x8f, 0x24, 0x6d, 0x00, 0xc8, 0x4a, 0xc1, 0x0a, 0xa7, 0x1a, 0x3f, 0xa1, 0xad, 0x2b,
    0xb9, 0x48, 0xef, 0xc1, 0xae, 0x41, 0xba, 0x8c, 0x92, 0x58, 0x17, 0x2c, 0xd9, 0xf0, 0x66, 0xdb,
    0xeb, 0x65, 0xd3, 0x71, 0x71, 0x9f, 0x22, 0xaf, 0x22, 0x2c, 0xae, 0xa4, 0x45, 0x0b, 0x73, 0xb6,
    0x93, 0xae, 0x59, 0x5d, 0x36, 0x21, 0x32, 0xb4, 0xc9, 0xdf, 0x9c, 0x70, 0xf6, 0xab, 0xf6, 0xfe,
    0x23, 0xcc, 0xb6, 0x1e, 0xa6, 0xed, 0xa4, 0x37, 0x0a, 0x54, 0xa0, 0xbe, 0x22, 0xe8, 0x11, 0x8a,
    0x4e, 0xa3, 0x83, 0x1b, 0xf2, 0x19, 0xa3, 0x6e, 0xf1, 0x11, 0xdf, 0x7f, 0xca, 0xbb, 0x64, 0x82,
    0x77, 0x91, 0x8e, 0x64, 0x05, 0x86, 0x1e, 0x60, 0xb7, 0x0e, 0x89, 0xe3, 0xa8, 0x32, 0x9d, 0xde,
    0xf1, 0xe2, 0x59, 0x1b, 0x31, 0xe0, 0x15, 0x01, 0xae, 0x81, 0x69, 0x5f, 0xa8, 0x4f, 0xa1, 0x6f,
    0xae, 0xc4, 0x33, 0x9b, 0xe1, 0x7e, 0xab, 0x14, 0x62, 0x36, 0xd5, 0x76, 0x89, 0xc5, 0xfa, 0x33,
    0xef, 0x1f, 0xcf, 0xd6, 0x25, 0x97, 0x97, 0x30, 0x18, 0x58, 0x12, 0xe9, 0xba, 0xcf, 0x4a, 0x0f,
    0x86, 0x02, 0x87, 0x6b, 0xef, 0xbf, 0x22, 0xe3, 0x93, 0xee, 0xfd, 0x78, 0xb0, 0x50, 0xc6, 0xce,
    0x8c, 0x9a, 0xbb, 0x68, 0x12, 0xa5, 0x33, 0xe1, 0xd4, 0x10, 0x4c, 0xea, 0xca, 0xd8, 0xa4, 0x19,
    0xd1, 0x93, 0xc4, 0x0b, 0x53, 0xfc, 0x48, 0x06, 0xb4, 0xe8, 0x05, 0x25, 0x96, 0x90, 0x31, 0x5b,
    0x58, 0x80, 0xb1, 0x77, 0x94, 0x63, 0x94, 0x68, 0x7f, 0xa2, 0x64, 0x8f, 0xb2, 0x06, 0x3d, 0xc1,
    0xba, 0x17, 0xb0, 0x07, 0x6f, 0x6f, 0xc6, 0x2d, 0x8c, 0x52, 0xc1, 0x55, 0xe4, 0xb5, 0xfc, 0xf6,
    0x15, 0x42, 0x6a, 0xc5, 0xaf, 0x6f, 0xba, 0xd4, 0xe7, 0x76, 0xbe, 0x9e, 0x36, 0xe5, 0xcb, 0x72,
    0xdb, 0xa5, 0x75, 0x1e, 0xc2, 0x2c, 0x2b, 0xae, 0x04, 0xe4, 0x4d, 0xc3, 0x86, 0xe7, 0x25, 0x24,
    0xf5, 0xfa, 0xea, 0xbe, 0xad, 0x15, 0x38, 0x29, 0x5a, 0x1f, 0xde, 0x09, 0xe0, 0x39, 0x92, 0x98,
    0xeb, 0x45, 0x6a, 0x07, 0x14, 0x4f, 0xbb, 0xc6, 0x27, 0xad, 0xf0, 0xa2, 0x24, 0x73, 0x54, 0x65,
    0xd0, 0xc2, 0x24, 0x29, 0x42, 0x1e, 0x04, 0x3d, 0x7e, 0xb9, 0x6b, 0x2f, 0xf6, 0x21, 0x61, 0x56,
    0xa0, 0x09, 0xa9, 0xc4, 0x8b, 0xf7, 0x44, 0x72, 0x33, 0xd4, 0xd0, 0xd1, 0x5a, 0xdc, 0x34, 0x70,
    0x9b, 0x37, 0xb6, 0x6b, 0xb1, 0xe3, 0x3c, 0xe9, 0x20, 0xde, 0x63, 0x1d, 0x6a, 0xc0, 0x6b, 0x7b,
    0xa5, 0x96, 0xfe, 0xd2, 0xc7, 0x74, 0xcd, 0xcc, 0x59, 0xa8, 0xe2, 0x47, 0x95, 0x68, 0xd8, 0x86,
    0xf9, 0x47, 0xdb, 0xa0, 0x2c, 0x04, 0x03, 0x13, 0x75, 0x3a, 0x1e, 0xb4, 0x31, 0xb5, 0x96, 0xd0,
    0x6a, 0xf8, 0xe0, 0x8f, 0x47, 0x95, 0xe4, 0xcd, 0x59, 0xff, 0x04, 0xfd, 0x67, 0x00, 0x6b, 0xd3,
    0x8a, 0xa1, 0xe3, 0xf6, 0x3d, 0xd3, 0xe7, 0x45, 0x0a, 0xe1, 0x23, 0xff, 0x8a, 0xf7, 0x5f, 0x0f,
    0xab, 0xbb, 0x09, 0x14, 0xe9, 0x06, 0x1b, 0xc4, 0xfc, 0xa7, 0x84, 0x0a, 0x88, 0x2c, 0xa3, 0x39,
    0xfa, 0x3a, 0x7e, 0xd5, 0xf0, 0xcb, 0x4e, 0xf0, 0x9a, 0x0e, 0x40, 0x88, 0x9d, 0xce, 0x1c, 0x17,
    0x8e, 0x65, 0x57, 0x5b, 0xc3, 0x7c, 0xbb, 0x5b, 0xb6, 0xc4, 0x8a, 0x1b, 0xd1, 0x55, 0x36, 0x7e,
    0xd1, 0xb3, 0xff, 0x26, 0xa6, 0x5d, 0xda, 0xaa, 0x00, 0xf7, 0x66, 0xd5, 0x00, 0xd3, 0xb5, 0xc2,
];

pub(super) static MD380: [u8; 1024] = [
    0xbc, 0xe4, 0x10, 0x67, 0x40, 0x6a, 0xd5, 0x31, 0x01, 0xee, 0x1a, 0x52, 0x10, 0xb5, 0xff, 0x23,
    0xb4, 0xc0, 0xa1, 0x8d, 0x14, 0x16, 0x2f, 0xf5, 0xd8, 0xcb, 0xe5, 0x14, 0x7e, 0xc9, 0x89, 0x36,
    0x26, 0x04, 0x37, 0x8d, 0x8a, 0x76, 0xa2, 0xf9, 0x42, 0x9a, 0x3e, 0x2f, 0x8b, 0x1c, 0x3f, 0x11,
    0xe4, 0x00, 0x73, 0x0d, 0xf9, 0x26, 0x6d, 0xd3, 0x71, 0x6d, 0xd2, 0x8b, 0xfd, 0x7e, 0x2a, 0x3d,
    0x6f, 0xb6, 0x35, 0xe8, 0x4d, 0xd1, 0x13, 0x46, 0xc4, 0x86, 0x55, 0x3c, 0x09, 0xaa, 0x61, 0xc6,
    0xc7, 0xb9, 0x7b, 0xcf, 0x61, 0xe4, 0x9e, 0x5d, 0x31, 0x73, 0xae, 0xe5, 0x13, 0x4b, 0x12, 0x14,
    0xbe, 0xc7, 0x9d, 0x10, 0x3b, 0xb2, 0xe5, 0x86, 0x25, 0x23, 0x63, 0xaf, 0xaa, 0x5b, 0x6d, 0x3b,
    0x9e, 0x9a, 0x06, 0x21, 0x08, 0xbb, 0xef, 0x8a, 0x4c, 0x91, 0x75, 0x5d, 0xc6, 0x82, 0x49, 0xaf,
    0x0a, 0xf2, 0xb4, 0xbb, 0x78, 0x5d, 0x84, 0x7c, 0x5e, 0x72, 0xbc, 0x96, 0x91, 0xa1, 0xef, 0x31,
    0x40, 0x14, 0x0d, 0x13, 0xc2, 0x54, 0xa4, 0xc2, 0xf7, 0xa1, 0x50, 0xeb, 0x25, 0xa6, 0x01, 0xb8,
    0x40, 0xdd, 0x94, 0x96, 0xf6, 0x98, 0xa0, 0x2e, 0x7c, 0xee, 0x35, 0x6a, 0xc2, 0xde, 0x66, 0xd2,
    0xb5, 0x83, 0x8b, 0xbb, 0xfe, 0x62, 0x86, 0x09, 0x7e, 0xa4, 0xa4, 0xf6, 0x13, 0x58, 0x56, 0x28,
    0x58, 0x4e, 0x87, 0x8f, 0xc3, 0xa3, 0x9f, 0xf4, 0xdf, 0xa7, 0x58, 0xf7, 0xba, 0x85, 0xb1, 0x62,
    0x09, 0xc9, 0xfd, 0x3d, 0x07, 0x76, 0x31, 0x93, 0xfc, 0x22, 0x30, 0xfd, 0x61, 0xc7, 0x86, 0x83,
    0x59, 0x51, 0xde, 0x37, 0xff, 0x9e, 0x4d, 0x71, 0xb6, 0xe2, 0x88, 0xea, 0xc6, 0x3b, 0xb2, 0xed,
    0x89, 0x0f, 0x2e, 0x9b, 0xb4, 0x97, 0xce, 0x4d, 0xad, 0xdc, 0x87, 0x77, 0xdb, 0x2b, 0xdd, 0xf2,
    0xdc, 0xa0, 0xfa, 0x16, 0x12, 0x6e, 0x7b, 0xeb, 0xaa, 0x94, 0xb4, 0x06, 0xa0, 0x5b, 0x73, 0xc6,
    0xb2, 0xf7, 0x4f, 0x8e, 0xdc, 0x1a, 0xf5, 0x45, 0x9f, 0xe2, 0x09, 0x3d, 0x0c, 0x82, 0x41, 0xcd,
    0xfd, 0x25, 0xd1, 0x12, 0xed, 0xa4, 0x26, 0xa5, 0x73, 0xc1, 0xd9, 0x55, 0x99, 0x10, 0xda, 0x02,
    0xf1, 0x0f, 0x95, 0xfd, 0x52, 0x79, 0x1e, 0x1c, 0x5c, 0x93, 0x3c, 0x96, 0x64, 0xac, 0xf5, 0xd1,
    0x48, 0x51, 0x29, 0x6e, 0xe7, 0x51, 0xa6, 0xb9, 0x95, 0xc5, 0x60, 0x28, 0x4b, 0xe7, 0x17, 0x36,
    0x40, 0xf1, 0x45, 0x9d, 0x43, 0x7c, 0x28, 0x80, 0x6c, 0xbf, 0x4d, 0x0c, 0x6a, 0x0f, 0x9a, 0x6c,
    0xcf, 0x1a, 0x53, 0x0c, 0x59, 0x18, 0xac, 0xd0, 0xf2, 0xe2, 0x00, 0x90, 0x1c, 0x25, 0x9f, 0xd5,
    0xae, 0xfb, 0xd7, 0x50, 0x0c, 0xf4, 0xb7, 0x59, 0x1c, 0x4b, 0x20, 0x74, 0x4a, 0x5f, 0xbc, 0x79,
    0x37, 0xda, 0x0b, 0x43, 0x11, 0xbc, 0x51, 0xcd, 0x99, 0x69, 0xd8, 0x6a, 0x5c, 0x81, 0xc7, 0xfa,
    0xb1, 0xd9, 0x2c, 0x64, 0x74, 0x6d, 0xe3, 0x15, 0xb2, 0x0c, 0x21, 0x4b, 0x27, 0x00, 0x0e, 0x35,
    0xa9, 0x7c, 0xb9, 0x64, 0xd3, 0xa0, 0x35, 0x9e, 0x43, 0x67, 0xb1, 0x89, 0x1f, 0x2b, 0x31, 0x67,
    0x57, 0x9a, 0x8a, 0x5f, 0x19, 0xc5, 0x02, 0x0a, 0xe5, 0x22, 0xfb, 0x06, 0x40, 0x28, 0x4e, 0xd8,
    0x46, 0xe0, 0xf4, 0x93, 0x95, 0x0c, 0xb8, 0x98, 0xe3, 0x68, 0xe4, 0xd1, 0xd2, 0xc9, 0xee, 0x6d,
    0x4a, 0xbb, 0x1f, 0x9f, 0xc9, 0x7b, 0x76, 0x8c, 0x31, 0x6b, 0xea, 0x93, 0xc2, 0x11, 0x93, 0xd8,
    0xb1, 0x4f, 0xce, 0xe6, 0xda, 0x29, 0x97, 0x3d, 0xbf, 0x33, 0x7e, 0x15, 0x56, 0x9a, 0x4e, 0xae,
    0xc9, 0x6a, 0x50, 0xc5, 0x9d, 0xa2, 0xfa, 0x60, 0x31, 0x4d, 0xf8, 0xbd, 0x34, 0x3d, 0x93, 0x13,
    0x5f, 0x0d, 0xaf, 0xfa, 0x8a, 0x43, 0x60, 0xfd, 0x18, 0x1e, 0x43, 0x03, 0xa3, 0xee, 0x20, 0x01,
    0x48, 0x03, 0x99, 0xea, 0x05, 0x60, 0x1e, 0xdc, 0xbb, 0x94, 0xc6, 0x73, 0x24, 0x84, 0x11, 0xe0,
    0xd3, 0x64, 0x2e, 0x27, 0xc8, 0xc8, 0x08, 0x28, 0x85, 0x1a, 0x25, 0xa5, 0x2b, 0xa2, 0x7f, 0x33,
    0x91, 0xff, 0xbc, 0x27, 0x5f, 0x52, 0x9d, 0x19, 0x70, 0xf2, 0x34, 0x56, 0x6f, 0x5b, 0xab, 0xbf,
    0xd4, 0x6f, 0x19, 0xd2, 0x59, 0x8b, 0xec, 0xc6, 0x6e, 0xe8, 0x63, 0xfc, 0xf1, 0x42, 0xff, 0xd7,
    0x21, 0x96, 0x7c, 0x3f, 0xfc, 0x17, 0xa2, 0x49, 0x9f, 0x79, 0x3f, 0x45, 0x0d, 0x6f, 0x61, 0x3b,
    0x0b, 0xca, 0x24, 0x15, 0x7c, 0x56, 0x02, 0xef, 0x80, 0x58, 0xb5, 0x36, 0x64, 0x1f, 0xc7, 0x91,
    0x61, 0x92, 0x8e, 0x22, 0x57, 0xea, 0xb2, 0x62, 0x6a, 0x39, 0x93, 0xcf, 0x7f, 0x97, 0x9f, 0x8f,
    0x3c, 0x23, 0x10, 0xf7, 0x77, 0x5a, 0x3b, 0xbd, 0x93, 0x97, 0xb9, 0x87, 0xef, 0x0a, 0x41, 0x93,
    0x13, 0xd7, 0x7e, 0x73, 0xfa, 0x99, 0xf0, 0x03, 0x1a, 0xf8, 0x48, 0x8d, 0x37, 0xc2, 0x16, 0x08,
    0x17, 0xfe, 0xb7, 0x0c, 0x0c, 0xa3, 0x77, 0xc9, 0xaf, 0x63, 0x62, 0x9f, 0xda, 0x71, 0xfc, 0xad,
    0xac, 0x4a, 0xef, 0x23, 0xb4, 0x24, 0x6c, 0x79, 0x46, 0x07, 0xfc, 0x70, 0xd8, 0x13, 0x6e, 0x55,
    0x47, 0x9e, 0x09, 0x93, 0x74, 0x3c, 0xef, 0x61, 0xa9, 0xa8, 0xe4, 0xc0, 0xe0, 0x35, 0x96, 0x7a,
    0x25, 0x02, 0xd5, 0xfb, 0xb7, 0x5f, 0x9d, 0x73, 0xa5, 0xdb, 0xd1, 0x25, 0x22, 0xa3, 0xa0, 0x4c,
    0x4d, 0x9e, 0xad, 0x66, 0xee, 0x94, 0xe3, 0xfd, 0xb3, 0xa9, 0xa4, 0x19, 0x40, 0x32, 0x15, 0xbf,
    0x48, 0xca, 0x4b, 0x45, 0x8b, 0xbc, 0xab, 0x00, 0xa1, 0x36, 0x35, 0xb7, 0xc3, 0x9d, 0x4c, 0x1b,
    0xa4, 0x88, 0x6e, 0x7d, 0xfc, 0x04, 0x0b, 0x67, 0x69, 0xfc, 0x1b, 0x02, 0xab, 0xee, 0x7a, 0x66,
    0xc1, 0xd0, 0xa8, 0x80, 0x45, 0x89, 0xdb, 0x62, 0xdf, 0x21, 0xfd, 0x5b, 0xc0, 0x86, 0x0d, 0xb0,
    0xa6, 0xb1, 0xa5, 0x2c, 0x66, 0x53, 0x40, 0xef, 0xbb, 0x9e, 0x2a, 0x3b, 0xcd, 0x9f, 0xa9, 0xe6,
    0xba, 0x8a, 0x19, 0x6c, 0x80, 0xbf, 0xce, 0xa0, 0x92, 0xa4, 0xfe, 0x0f, 0x12, 0x37, 0x5c, 0x67,
    0xf9, 0x4a, 0x3a, 0xb8, 0xa0, 0xff, 0x43, 0x2d, 0x8d, 0x26, 0x0e, 0xaa, 0xf8, 0x53, 0x87, 0x00,
    0x47, 0x4d, 0x57, 0xbe, 0x30, 0xe9, 0x9a, 0x69, 0xe3, 0x11, 0xe9, 0x96, 0x53, 0xe3, 0xfa, 0x2d,
    0x24, 0x02, 0x3a, 0x6b, 0x94, 0x7a, 0xfb, 0x89, 0x83, 0xd0, 0xd6, 0xd0, 0x5e, 0x76, 0x6c, 0x08,
    0x23, 0x8a, 0xe8, 0x5f, 0xca, 0x38, 0x92, 0xba, 0x5e, 0x97, 0xd6, 0x82, 0xfa, 0xa4, 0xf1, 0x7d,
    0x9f, 0xc1, 0x02, 0xdf, 0xaa, 0x24, 0x6e, 0x51, 0x5d, 0xf1, 0x04, 0xcb, 0xa9, 0xa8, 0x50, 0x39,
    0x3e, 0x29, 0xcf, 0xb7, 0x2d, 0xd4, 0x9e, 0x42, 0x10, 0xda, 0xeb, 0xbd, 0xaf, 0x4d, 0xcf, 0x51,
    0xc9, 0xc2, 0xc8, 0x6b, 0x1a, 0x39, 0xda, 0x00, 0xf7, 0x53, 0x6b, 0xcb, 0xd8, 0xba, 0x8a, 0xd2,
    0xe0, 0xbc, 0x74, 0x03, 0x73, 0x8c, 0xb7, 0x58, 0x04, 0xd1, 0x55, 0xd1, 0x45, 0xae, 0x8b, 0xeb,
    0x77, 0xeb, 0xd9, 0xad, 0x03, 0xc4, 0x82, 0xbd, 0xbb, 0xf7, 0xc7, 0xf9, 0x94, 0xc2, 0x46, 0xf5,
    0x75, 0x8c, 0x87, 0x54, 0x6d, 0x25, 0x36, 0x2c, 0xaf, 0xec, 0x82, 0xe0, 0xf5, 0x13, 0xbd, 0xdf,
    0x77, 0x37, 0xb0, 0x9b, 0xfa, 0xd5, 0xcd, 0xd4, 0x84, 0x65, 0x14, 0xe5, 0xfa, 0xda, 0x24, 0x1a,
    0x68, 0xed, 0x7d, 0xec, 0x22, 0x5f, 0x1c, 0x35, 0x17, 0xa0, 0x21, 0x3c, 0x39, 0x77, 0x7b, 0x92,
];
