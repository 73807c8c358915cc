//! Analytic geocentric positions of the Sun, Moon and the five classical
//! planets.
//!
//! All longitudes are tropical, referred to the mean equinox of date.
//! `t` is Julian centuries since J2000.0 throughout.
//!
//! Sources:
//! - Sun: Meeus, "Astronomical Algorithms" (2nd ed), Chapter 25 (low accuracy).
//! - Moon: Meeus Chapter 47, main periodic terms only.
//! - Planets: JPL "Approximate Positions of the Planets" (Standish), Table 1
//!   mean elements, equation of centre to third order in e.

use kundali_frames::general_precession_deg;
use kundali_vedic::normalize_360;

/// Astronomical unit in kilometres.
pub const AU_KM: f64 = 149_597_870.7;

/// Geocentric ecliptic position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EclipticPosition {
    /// Longitude, degrees [0, 360).
    pub longitude: f64,
    /// Latitude, degrees.
    pub latitude: f64,
    /// Distance from Earth, AU.
    pub distance: f64,
}

/// Planets computed from mean orbital elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Planet {
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
}

pub const ALL_PLANETS: [Planet; 5] = [
    Planet::Mercury,
    Planet::Venus,
    Planet::Mars,
    Planet::Jupiter,
    Planet::Saturn,
];

/// Keplerian elements at J2000 with rates per Julian century.
/// `[a (AU), e, I, L, long. perihelion, long. node]`, angles in degrees.
struct Elements {
    base: [f64; 6],
    rate: [f64; 6],
}

const MERCURY: Elements = Elements {
    base: [
        0.387_099_27,
        0.205_635_93,
        7.004_979_02,
        252.250_323_50,
        77.457_796_28,
        48.330_765_93,
    ],
    rate: [
        0.000_000_37,
        0.000_019_06,
        -0.005_947_49,
        149_472.674_111_75,
        0.160_476_89,
        -0.125_340_81,
    ],
};

const VENUS: Elements = Elements {
    base: [
        0.723_335_66,
        0.006_776_72,
        3.394_676_05,
        181.979_099_50,
        131.602_467_18,
        76.679_842_55,
    ],
    rate: [
        0.000_003_90,
        -0.000_041_07,
        -0.000_788_90,
        58_517.815_387_29,
        0.002_683_29,
        -0.277_694_18,
    ],
};

const MARS: Elements = Elements {
    base: [
        1.523_710_34,
        0.093_394_10,
        1.849_691_42,
        -4.553_432_05,
        -23.943_629_59,
        49.559_538_91,
    ],
    rate: [
        0.000_018_47,
        0.000_078_82,
        -0.008_131_31,
        19_140.302_684_99,
        0.444_410_88,
        -0.292_573_43,
    ],
};

const JUPITER: Elements = Elements {
    base: [
        5.202_887_00,
        0.048_386_24,
        1.304_396_95,
        34.396_440_51,
        14.728_479_83,
        100.473_909_09,
    ],
    rate: [
        -0.000_116_07,
        -0.000_132_53,
        -0.001_837_14,
        3_034.746_127_75,
        0.212_526_68,
        0.204_691_06,
    ],
};

const SATURN: Elements = Elements {
    base: [
        9.536_675_94,
        0.053_861_79,
        2.485_991_87,
        49.954_244_23,
        92.598_878_31,
        113.662_424_48,
    ],
    rate: [
        -0.001_250_60,
        -0.000_509_91,
        0.001_936_09,
        1_222.493_622_01,
        -0.418_972_16,
        -0.288_677_94,
    ],
};

impl Planet {
    fn elements(self) -> &'static Elements {
        match self {
            Self::Mercury => &MERCURY,
            Self::Venus => &VENUS,
            Self::Mars => &MARS,
            Self::Jupiter => &JUPITER,
            Self::Saturn => &SATURN,
        }
    }
}

/// Sun: geometric longitude of date, apparent longitude and distance.
struct SolarTerms {
    true_lon: f64,
    apparent_lon: f64,
    radius_au: f64,
}

fn solar_terms(t: f64) -> SolarTerms {
    let l0 = 280.466_46 + 36_000.769_83 * t + 0.000_303_2 * t * t;
    let m = 357.529_11 + 35_999.050_29 * t - 0.000_153_7 * t * t;
    let e = 0.016_708_634 - 0.000_042_037 * t - 0.000_000_126_7 * t * t;
    let mr = m.to_radians();

    let c = (1.914_602 - 0.004_817 * t - 0.000_014 * t * t) * mr.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * mr).sin()
        + 0.000_289 * (3.0 * mr).sin();

    let true_lon = l0 + c;
    let nu = (m + c).to_radians();
    let radius_au = 1.000_001_018 * (1.0 - e * e) / (1.0 + e * nu.cos());

    let omega = (125.04 - 1_934.136 * t).to_radians();
    let apparent_lon = true_lon - 0.005_69 - 0.004_78 * omega.sin();

    SolarTerms {
        true_lon: normalize_360(true_lon),
        apparent_lon: normalize_360(apparent_lon),
        radius_au,
    }
}

/// Apparent geocentric position of the Sun.
pub fn sun_position(t: f64) -> EclipticPosition {
    let s = solar_terms(t);
    EclipticPosition {
        longitude: s.apparent_lon,
        latitude: 0.0,
        distance: s.radius_au,
    }
}

/// (Σl coefficient, Σr coefficient, D, M, M', F). Σl in 1e-6 deg (sine),
/// Σr in metres (cosine).
const MOON_LON_DIST: [(f64, f64, f64, f64, f64, f64); 13] = [
    (6_288_774.0, -20_905_355.0, 0.0, 0.0, 1.0, 0.0),
    (1_274_027.0, -3_699_111.0, 2.0, 0.0, -1.0, 0.0),
    (658_314.0, -2_955_968.0, 2.0, 0.0, 0.0, 0.0),
    (213_618.0, -569_925.0, 0.0, 0.0, 2.0, 0.0),
    (-185_116.0, 48_888.0, 0.0, 1.0, 0.0, 0.0),
    (-114_332.0, -3_149.0, 0.0, 0.0, 0.0, 2.0),
    (58_793.0, 246_158.0, 2.0, 0.0, -2.0, 0.0),
    (57_066.0, -152_138.0, 2.0, -1.0, -1.0, 0.0),
    (53_322.0, -170_733.0, 2.0, 0.0, 1.0, 0.0),
    (45_758.0, -204_586.0, 2.0, -1.0, 0.0, 0.0),
    (-40_923.0, -129_620.0, 0.0, 1.0, -1.0, 0.0),
    (-34_720.0, 108_743.0, 1.0, 0.0, 0.0, 0.0),
    (-30_383.0, 104_755.0, 0.0, 1.0, 1.0, 0.0),
];

/// (Σb coefficient, D, M, M', F), 1e-6 deg (sine).
const MOON_LAT: [(f64, f64, f64, f64, f64); 6] = [
    (5_128_122.0, 0.0, 0.0, 0.0, 1.0),
    (280_602.0, 0.0, 0.0, 1.0, 1.0),
    (277_693.0, 0.0, 0.0, 1.0, -1.0),
    (173_237.0, 2.0, 0.0, 0.0, -1.0),
    (55_413.0, 2.0, 0.0, -1.0, 1.0),
    (46_271.0, 2.0, 0.0, -1.0, -1.0),
];

/// Geocentric position of the Moon (mean equinox of date).
pub fn moon_position(t: f64) -> EclipticPosition {
    let lp = 218.316_447_7 + 481_267.881_234_21 * t;
    let d = (297.850_192_1 + 445_267.111_403_4 * t).to_radians();
    let m = (357.529_109_2 + 35_999.050_290_9 * t).to_radians();
    let mp = (134.963_396_4 + 477_198.867_505_5 * t).to_radians();
    let f = (93.272_095_0 + 483_202.017_523_3 * t).to_radians();
    // Eccentricity of Earth's orbit scales terms containing M.
    let e = 1.0 - 0.002_516 * t - 0.000_007_4 * t * t;

    let mut sum_l = 0.0;
    let mut sum_r = 0.0;
    for &(cl, cr, kd, km, kmp, kf) in &MOON_LON_DIST {
        let arg = kd * d + km * m + kmp * mp + kf * f;
        let scale = e.powi(km.abs() as i32);
        sum_l += cl * scale * arg.sin();
        sum_r += cr * scale * arg.cos();
    }

    let mut sum_b = 0.0;
    for &(cb, kd, km, kmp, kf) in &MOON_LAT {
        sum_b += cb * (kd * d + km * m + kmp * mp + kf * f).sin();
    }

    EclipticPosition {
        longitude: normalize_360(lp + sum_l / 1e6),
        latitude: sum_b / 1e6,
        distance: (385_000.56 + sum_r / 1000.0) / AU_KM,
    }
}

/// Heliocentric rectangular ecliptic coordinates (J2000 frame) in AU.
fn heliocentric_xyz(planet: Planet, t: f64) -> [f64; 3] {
    let el = planet.elements();
    let at = |i: usize| el.base[i] + el.rate[i] * t;
    let (a, e) = (at(0), at(1));
    let (incl, mean_lon, peri, node) = (at(2), at(3), at(4), at(5));

    let m = normalize_360(mean_lon - peri).to_radians();
    let c = (2.0 * e - e.powi(3) / 4.0) * m.sin()
        + 1.25 * e * e * (2.0 * m).sin()
        + 13.0 / 12.0 * e.powi(3) * (3.0 * m).sin();
    let nu = m + c;
    let r = a * (1.0 - e * e) / (1.0 + e * nu.cos());

    let u = nu + (peri - node).to_radians();
    let (node, incl) = (node.to_radians(), incl.to_radians());
    [
        r * (node.cos() * u.cos() - node.sin() * u.sin() * incl.cos()),
        r * (node.sin() * u.cos() + node.cos() * u.sin() * incl.cos()),
        r * u.sin() * incl.sin(),
    ]
}

/// Geocentric position of a planet (mean equinox of date).
///
/// The Sun's geometric position is moved back to the J2000 frame, added
/// to the planet's heliocentric vector, and the result precessed forward.
pub fn planet_position(planet: Planet, t: f64) -> EclipticPosition {
    let precession = general_precession_deg(t);
    let sun = solar_terms(t);
    let sun_lon = (sun.true_lon - precession).to_radians();

    let [hx, hy, hz] = heliocentric_xyz(planet, t);
    let x = hx + sun.radius_au * sun_lon.cos();
    let y = hy + sun.radius_au * sun_lon.sin();
    let z = hz;

    let rho = (x * x + y * y).sqrt();
    EclipticPosition {
        longitude: normalize_360(y.atan2(x).to_degrees() + precession),
        latitude: z.atan2(rho).to_degrees(),
        distance: (rho * rho + z * z).sqrt(),
    }
}
