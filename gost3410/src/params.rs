//! Named domain parameter sets.
//!
//! Each set is identified by an ASN.1 object identifier. Lookups search the
//! GOST R 34.10-2012 table ([RFC 7836], TC26) before the GOST R 34.10-2001
//! table ([RFC 4357], CryptoPro); the first match wins.
//!
//! Several identifiers refer to the same curve: the TC26 256-bit sets B, C
//! and D are the CryptoPro sets A, B and C, and the CryptoPro key exchange
//! sets XchA and XchB are the CryptoPro signature sets A and C.
//!
//! [RFC 4357]: https://datatracker.ietf.org/doc/html/rfc4357
//! [RFC 7836]: https://datatracker.ietf.org/doc/html/rfc7836

use crate::{Error, Result};
use const_oid::ObjectIdentifier;

/// Domain parameters of a GOST R 34.10 curve: `y² = x³ + ax + b` over 𝔽ₚ
/// with a base point `(x, y)` of prime order `q`.
///
/// Numeric fields are big-endian hexadecimal strings.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct DomainParameters {
    /// Object identifier of the parameter set.
    pub oid: ObjectIdentifier,

    /// Textual name of the parameter set.
    pub name: &'static str,

    /// Field modulus.
    pub p: &'static str,

    /// Curve coefficient `a`.
    pub a: &'static str,

    /// Curve coefficient `b`.
    pub b: &'static str,

    /// Base point x-coordinate.
    pub x: &'static str,

    /// Base point y-coordinate.
    pub y: &'static str,

    /// Order of the base point.
    pub q: &'static str,
}

impl DomainParameters {
    /// Iterate over every known parameter set in lookup order.
    pub fn all() -> impl Iterator<Item = &'static DomainParameters> {
        TC26.iter().chain(CRYPTOPRO.iter())
    }
}

/// Look up a parameter set by object identifier.
pub fn resolve(oid: &ObjectIdentifier) -> Result<&'static DomainParameters> {
    DomainParameters::all()
        .find(|params| params.oid == *oid)
        .ok_or(Error::UnsupportedParameterSet)
}

/// Look up a parameter set by name, e.g. `id-tc26-gost-3410-12-512-paramSetA`.
pub fn resolve_name(name: &str) -> Result<&'static DomainParameters> {
    DomainParameters::all()
        .find(|params| params.name == name)
        .ok_or(Error::UnsupportedParameterSet)
}

/// GOST R 34.10-2012 parameter sets.
pub static TC26: [DomainParameters; 8] = [
    TC26_512_TEST,
    TC26_512_A,
    TC26_512_B,
    TC26_512_C,
    TC26_256_A,
    DomainParameters {
        oid: ObjectIdentifier::new_unwrap("1.2.643.7.1.2.1.1.2"),
        name: "id-tc26-gost-3410-2012-256-paramSetB",
        ..CRYPTOPRO_A
    },
    DomainParameters {
        oid: ObjectIdentifier::new_unwrap("1.2.643.7.1.2.1.1.3"),
        name: "id-tc26-gost-3410-2012-256-paramSetC",
        ..CRYPTOPRO_B
    },
    DomainParameters {
        oid: ObjectIdentifier::new_unwrap("1.2.643.7.1.2.1.1.4"),
        name: "id-tc26-gost-3410-2012-256-paramSetD",
        ..CRYPTOPRO_C
    },
];

/// GOST R 34.10-2001 parameter sets.
pub static CRYPTOPRO: [DomainParameters; 6] = [
    GOST_2001_TEST,
    CRYPTOPRO_A,
    CRYPTOPRO_B,
    CRYPTOPRO_C,
    DomainParameters {
        oid: ObjectIdentifier::new_unwrap("1.2.643.2.2.36.0"),
        name: "id-GostR3410-2001-CryptoPro-XchA-ParamSet",
        ..CRYPTOPRO_A
    },
    DomainParameters {
        oid: ObjectIdentifier::new_unwrap("1.2.643.2.2.36.1"),
        name: "id-GostR3410-2001-CryptoPro-XchB-ParamSet",
        ..CRYPTOPRO_C
    },
];

/// `id-tc26-gost-3410-12-512-paramSetTest`: the 512-bit example curve of
/// GOST R 34.10-2012 appendix A.2.
pub const TC26_512_TEST: DomainParameters = DomainParameters {
    oid: ObjectIdentifier::new_unwrap("1.2.643.7.1.2.1.2.0"),
    name: "id-tc26-gost-3410-12-512-paramSetTest",
    p: "4531ACD1FE0023C7550D267B6B2FEE80922B14B2FFB90F04D4EB7C09B5D2D15DF1D852741AF4704A0458047E80E4546D35B8336FAC224DD81664BBF528BE6373",
    a: "7",
    b: "1CFF0806A31116DA29D8CFA54E57EB748BC5F377E49400FDD788B649ECA1AC4361834013B2AD7322480A89CA58E0CF74BC9E540C2ADD6897FAD0A3084F302ADC",
    x: "24D19CC64572EE30F396BF6EBBFD7A6C5213B3B3D7057CC825F91093A68CD762FD60611262CD838DC6B60AA7EEE804E28BC849977FAC33B4B530F1B120248A9A",
    y: "2BB312A43BD2CE6E0D020613C857ACDDCFBF061E91E5F2C3F32447C259F39B2C83AB156D77F1496BF7EB3351E1EE4E43DC1A18B91B24640B6DBB92CB1ADD371E",
    q: "4531ACD1FE0023C7550D267B6B2FEE80922B14B2FFB90F04D4EB7C09B5D2D15DA82F2D7ECB1DBAC719905C5EECC423F1D86E25EDBE23C595D644AAF187E6E6DF",
};

/// `id-tc26-gost-3410-12-512-paramSetA`
pub const TC26_512_A: DomainParameters = DomainParameters {
    oid: ObjectIdentifier::new_unwrap("1.2.643.7.1.2.1.2.1"),
    name: "id-tc26-gost-3410-12-512-paramSetA",
    p: "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFDC7",
    a: "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFDC4",
    b: "E8C2505DEDFC86DDC1BD0B2B6667F1DA34B82574761CB0E879BD081CFD0B6265EE3CB090F30D27614CB4574010DA90DD862EF9D4EBEE4761503190785A71C760",
    x: "3",
    y: "7503CFE87A836AE3A61B8816E25450E6CE5E1C93ACF1ABC1778064FDCBEFA921DF1626BE4FD036E93D75E6A50E3A41E98028FE5FC235F5B889A589CB5215F2A4",
    q: "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF27E69532F48D89116FF22B8D4E0560609B4B38ABFAD2B85DCACDB1411F10B275",
};

/// `id-tc26-gost-3410-12-512-paramSetB`
pub const TC26_512_B: DomainParameters = DomainParameters {
    oid: ObjectIdentifier::new_unwrap("1.2.643.7.1.2.1.2.2"),
    name: "id-tc26-gost-3410-12-512-paramSetB",
    p: "8000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000006F",
    a: "8000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000006C",
    b: "687D1B459DC841457E3E06CF6F5E2517B97C7D614AF138BCBF85DC806C4B289F3E965D2DB1416D217F8B276FAD1AB69C50F78BEE1FA3106EFB8CCBC7C5140116",
    x: "2",
    y: "1A8F7EDA389B094C2C071E3647A8940F3C123B697578C213BE6DD9E6C8EC7335DCB228FD1EDF4A39152CBCAAF8C0398828041055F94CEEEC7E21340780FE41BD",
    q: "800000000000000000000000000000000000000000000000000000000000000149A1EC142565A545ACFDB77BD9D40CFA8B996712101BEA0EC6346C54374F25BD",
};

/// `id-tc26-gost-3410-12-512-paramSetC`: twisted Edwards curve with
/// cofactor 4, given here in Weierstrass form.
pub const TC26_512_C: DomainParameters = DomainParameters {
    oid: ObjectIdentifier::new_unwrap("1.2.643.7.1.2.1.2.3"),
    name: "id-tc26-gost-3410-12-512-paramSetC",
    p: "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFDC7",
    a: "DC9203E514A721875485A529D2C722FB187BC8980EB866644DE41C68E143064546E861C0E2C9EDD92ADE71F46FCF50FF2AD97F951FDA9F2A2EB6546F39689BD3",
    b: "B4C4EE28CEBC6C2C8AC12952CF37F16AC7EFB6A9F69F4B57FFDA2E4F0DE5ADE038CBC2FFF719D2C18DE0284B8BFEF3B52B8CC7A5F5BF0A3C8D2319A5312557E1",
    x: "E2E31EDFC23DE7BDEBE241CE593EF5DE2295B7A9CBAEF021D385F7074CEA043AA27272A7AE602BF2A7B9033DB9ED3610C6FB85487EAE97AAC5BC7928C1950148",
    y: "F5CE40D95B5EB899ABBCCFF5911CB8577939804D6527378B8C108C3D2090FF9BE18E2D33E3021ED2EF32D85822423B6304F726AA854BAE07D0396E9A9ADDC40F",
    q: "3FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFC98CDBA46506AB004C33A9FF5147502CC8EDA9E7A769A12694623CEF47F023ED",
};

/// `id-tc26-gost-3410-2012-256-paramSetA`: twisted Edwards curve with
/// cofactor 4, given here in Weierstrass form.
pub const TC26_256_A: DomainParameters = DomainParameters {
    oid: ObjectIdentifier::new_unwrap("1.2.643.7.1.2.1.1.1"),
    name: "id-tc26-gost-3410-2012-256-paramSetA",
    p: "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFD97",
    a: "C2173F1513981673AF4892C23035A27CE25E2013BF95AA33B22C656F277E7335",
    b: "295F9BAE7428ED9CCC20E7C359A9D41A22FCCD9108E17BF7BA9337A6F8AE9513",
    x: "91E38443A5E82C0D880923425712B2BB658B9196932E02C78B2582FE742DAA28",
    y: "32879423AB1A0375895786C4BB46E9565FDE0B5344766740AF268ADB32322E5C",
    q: "400000000000000000000000000000000FD8CDDFC87B6635C115AF556C360C67",
};

/// `id-GostR3410-2001-TestParamSet`: the example curve of GOST R 34.10-2001
/// appendix A.1, also used by [RFC 7091] section 7.1.
///
/// [RFC 7091]: https://datatracker.ietf.org/doc/html/rfc7091
pub const GOST_2001_TEST: DomainParameters = DomainParameters {
    oid: ObjectIdentifier::new_unwrap("1.2.643.2.2.35.0"),
    name: "id-GostR3410-2001-TestParamSet",
    p: "8000000000000000000000000000000000000000000000000000000000000431",
    a: "7",
    b: "5FBFF498AA938CE739B8E022FBAFEF40563F6E6A3472FC2A514C0CE9DAE23B7E",
    x: "2",
    y: "08E2A8A0E65147D4BD6316030E16D19C85C97F0A9CA267122B96ABBCEA7E8FC8",
    q: "8000000000000000000000000000000150FE8A1892976154C59CFC193ACCF5B3",
};

/// `id-GostR3410-2001-CryptoPro-A-ParamSet`
pub const CRYPTOPRO_A: DomainParameters = DomainParameters {
    oid: ObjectIdentifier::new_unwrap("1.2.643.2.2.35.1"),
    name: "id-GostR3410-2001-CryptoPro-A-ParamSet",
    p: "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFD97",
    a: "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFD94",
    b: "A6",
    x: "1",
    y: "8D91E471E0989CDA27DF505A453F2B7635294F2DDF23E3B122ACC99C9E9F1E14",
    q: "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF6C611070995AD10045841B09B761B893",
};

/// `id-GostR3410-2001-CryptoPro-B-ParamSet`
pub const CRYPTOPRO_B: DomainParameters = DomainParameters {
    oid: ObjectIdentifier::new_unwrap("1.2.643.2.2.35.2"),
    name: "id-GostR3410-2001-CryptoPro-B-ParamSet",
    p: "8000000000000000000000000000000000000000000000000000000000000C99",
    a: "8000000000000000000000000000000000000000000000000000000000000C96",
    b: "3E1AF419A269A5F866A7D3C25C3DF80AE979259373FF2B182F49D4CE7E1BBC8B",
    x: "1",
    y: "3FA8124359F96680B83D1C3EB2C070E5C545C9858D03ECFB744BF8D717717EFC",
    q: "800000000000000000000000000000015F700CFFF1A624E5E497161BCC8A198F",
};

/// `id-GostR3410-2001-CryptoPro-C-ParamSet`
pub const CRYPTOPRO_C: DomainParameters = DomainParameters {
    oid: ObjectIdentifier::new_unwrap("1.2.643.2.2.35.3"),
    name: "id-GostR3410-2001-CryptoPro-C-ParamSet",
    p: "9B9F605F5A858107AB1EC85E6B41C8AACF846E86789051D37998F7B9022D759B",
    a: "9B9F605F5A858107AB1EC85E6B41C8AACF846E86789051D37998F7B9022D7598",
    b: "805A",
    x: "0",
    y: "41ECE55743711A8C3CBF3783CD08C0EE4D4DC440D4641A8F366E550DFDB3BB67",
    q: "9B9F605F5A858107AB1EC85E6B41C8AA582CA3511EDDFB74F02F3A6598980BB9",
};
