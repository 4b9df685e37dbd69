// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Table-driven kernels.
//!
//! The top bits of the s2.30 input select a segment; the remaining bits,
//! rescaled to `[0, 1)`, drive a short per-segment polynomial. Row `i` of
//! a table holds the coefficients for the segment starting at `i / SEGMENTS`.

use super::poly::horner;

/// Evaluate segment `a >> (30 - BITS)` of `table`.
///
/// The last segment also absorbs `a == 1 << 30`, which only the arctangent
/// kernels can receive.
#[inline(always)]
fn segment<const S: usize, const N: usize>(table: &[[i32; N]; S], bits: u32, a: i32) -> i32 {
    let shift = 30 - bits;
    let last = (S - 1) as i32;
    let idx = (a >> shift).clamp(0, last);
    let u = (a - (idx << shift)) << bits;
    horner(u, &table[idx as usize])
}

#[inline(always)]
fn lut8<const N: usize>(table: &[[i32; N]; 8], a: i32) -> i32 {
    segment(table, 3, a)
}

#[inline(always)]
fn lut16<const N: usize>(table: &[[i32; N]; 16], a: i32) -> i32 {
    segment(table, 4, a)
}

const RCP_POLY4_LUT8: [[i32; 5]; 8] = [
    [1073741824, -134216078, 16760755, -2045514, 196242],
    [954437177, -106047733, 11774792, -1283055, 112303],
    [858993459, -85898885, 8585364, -844761, 67983],
    [780903145, -70990929, 6451109, -578520, 43086],
    [715827883, -59652163, 4969435, -409321, 28370],
    [660764199, -50827914, 3908848, -297666, 19293],
    [613566757, -43826131, 3129793, -221599, 13488],
    [572662306, -38177443, 2544732, -168340, 9658],
];

const SQRT_POLY3_LUT8: [[i32; 4]; 8] = [
    [1073741824, 67107299, -2087421, 113561],
    [1138875187, 63269787, -1750970, 85901],
    [1200479854, 60023250, -1496005, 66830],
    [1259073893, 57230093, -1297368, 53200],
    [1315059792, 54793756, -1139067, 43166],
    [1368757628, 52644218, -1010507, 35595],
    [1420426919, 50729295, -904418, 29761],
    [1470281545, 49009196, -815664, 25182],
];

const RSQRT_POLY3_LUT16: [[i32; 4]; 16] = [
    [1073741824, -33553703, 1568368, -73947],
    [1041682578, -30637164, 1348221, -60162],
    [1012333500, -28119940, 1169006, -49513],
    [985333074, -25929475, 1021437, -41170],
    [960383883, -24009324, 898679, -34550],
    [937238702, -22314987, 795617, -29239],
    [915690104, -20810959, 708368, -24933],
    [895562589, -19468604, 633945, -21409],
    [876706528, -18264597, 570022, -18500],
    [858993459, -17179767, 514770, -16081],
    [842312387, -16198229, 466733, -14053],
    [826566842, -15306721, 424744, -12343],
    [811672525, -14494090, 387858, -10891],
    [797555404, -13750902, 355304, -9652],
    [784150157, -13069124, 326451, -8588],
    [771398898, -12441878, 300773, -7670],
];

const LOG_POLY3_LUT8: [[i32; 4]; 8] = [
    [0, 134207968, -8327695, 588772],
    [126468572, 119298417, -6589270, 421148],
    [239598564, 107370021, -5342877, 311585],
    [341937090, 97610008, -4419079, 236966],
    [435364845, 89476423, -3715516, 184397],
    [521310048, 82594012, -3167406, 146298],
    [600882877, 76694709, -2732135, 118013],
    [674963409, 71581920, -2380743, 96575],
];

const LOG_POLY5_LUT8: [[i32; 6]; 8] = [
    [0, 134217716, -8388434, 698232, -63831, 4889],
    [126468572, 119304641, -6627947, 490549, -40049, 2799],
    [239598564, 107374179, -5368661, 357687, -26374, 1695],
    [341937090, 97612891, -4436922, 268775, -18065, 1075],
    [435364845, 89478484, -3728253, 207047, -12783, 708],
    [521310048, 82595524, -3176740, 162861, -9297, 481],
    [600882877, 76695844, -2739130, 130403, -6922, 337],
    [674963409, 71582788, -2386088, 106027, -5258, 241],
];

const LOG2_POLY3_LUT16: [[i32; 4]; 16] = [
    [0, 96816651, -3019552, 115460],
    [93912511, 91121701, -2675341, 96747],
    [182455581, 86059496, -2386776, 81870],
    [266210141, 81530134, -2142483, 69893],
    [345667660, 77453693, -1933851, 60143],
    [421247625, 73765473, -1754263, 52126],
    [493310944, 70412538, -1598571, 45472],
    [562170370, 67351156, -1462716, 39905],
    [628098702, 64544884, -1343468, 35211],
    [691335320, 61963110, -1238226, 31225],
    [752091421, 59579932, -1144880, 27818],
    [810554283, 57373282, -1061703, 24890],
    [866890747, 55324249, -987270, 22359],
    [921250079, 53416526, -920397, 20159],
    [973766362, 51635984, -860095, 18239],
    [1024560487, 49970314, -805529, 16555],
];

const LOG2_POLY4_LUT16: [[i32; 5]; 16] = [
    [0, 96817607, -3025375, 125524, -5247],
    [93912511, 91122458, -2679942, 104699, -4145],
    [182455581, 86060101, -2390459, 88235, -3318],
    [266210141, 81530624, -2145467, 75049, -2687],
    [345667660, 77454094, -1936293, 64364, -2200],
    [421247625, 73765805, -1756282, 55614, -1818],
    [493310944, 70412815, -1600254, 48380, -1515],
    [562170370, 67351388, -1464131, 42348, -1273],
    [628098702, 64545081, -1344665, 37279, -1078],
    [691335320, 61963278, -1239246, 32987, -918],
    [752091421, 59580075, -1145754, 29329, -787],
    [810554283, 57373406, -1062457, 26193, -679],
    [866890747, 55324356, -987924, 23488, -588],
    [921250079, 53416620, -920967, 21143, -512],
    [973766362, 51636066, -860593, 19100, -448],
    [1024560487, 49970387, -805967, 17312, -394],
];

const ATAN_POLY3_LUT8: [[i32; 4]; 8] = [
    [0, 134220307, -13591, -681701],
    [133525159, 132160162, -2076262, -565595],
    [263043837, 126331846, -3771459, -377612],
    [385227074, 117678871, -4888134, -180401],
    [497837829, 107380496, -5407903, -19282],
    [599791448, 96519977, -5446482, 88925],
    [690954054, 85901208, -5165861, 148345],
    [771837835, 76017632, -4712505, 171871],
];

const ATAN_POLY5_LUT8: [[i32; 6]; 8] = [
    [0, 134217722, 77, -699378, 582, 6156],
    [133525159, 132152826, -2032932, -636863, 32017, 3629],
    [263043837, 126322555, -3715192, -474355, 49897, 332],
    [385227074, 117670331, -4835675, -272775, 50837, -1963],
    [497837829, 107374182, -5368698, -89539, 40418, -2744],
    [599791448, 96516121, -5422286, 44823, 26418, -2469],
    [690954054, 85899349, -5154003, 126181, 14039, -1785],
    [771837835, 76017123, -4709061, 164873, 5193, -1106],
];

/// `1 / (1 + a)`, 8 segments of degree 4.
#[inline]
pub fn rcp_poly4_lut8(a: i32) -> i32 {
    lut8(&RCP_POLY4_LUT8, a)
}

/// `sqrt(1 + a)`, 8 segments of degree 3.
#[inline]
pub fn sqrt_poly3_lut8(a: i32) -> i32 {
    lut8(&SQRT_POLY3_LUT8, a)
}

/// `1 / sqrt(1 + a)`, 16 segments of degree 3.
#[inline]
pub fn rsqrt_poly3_lut16(a: i32) -> i32 {
    lut16(&RSQRT_POLY3_LUT16, a)
}

/// `ln(1 + a)`, 8 segments of degree 3.
#[inline]
pub fn log_poly3_lut8(a: i32) -> i32 {
    lut8(&LOG_POLY3_LUT8, a)
}

/// `ln(1 + a)`, 8 segments of degree 5.
#[inline]
pub fn log_poly5_lut8(a: i32) -> i32 {
    lut8(&LOG_POLY5_LUT8, a)
}

/// `log2(1 + a)`, 16 segments of degree 3.
#[inline]
pub fn log2_poly3_lut16(a: i32) -> i32 {
    lut16(&LOG2_POLY3_LUT16, a)
}

/// `log2(1 + a)`, 16 segments of degree 4.
#[inline]
pub fn log2_poly4_lut16(a: i32) -> i32 {
    lut16(&LOG2_POLY4_LUT16, a)
}

/// `atan(a)` for `a` in `[0, 1]`, 8 segments of degree 3.
#[inline]
pub fn atan_poly3_lut8(a: i32) -> i32 {
    lut8(&ATAN_POLY3_LUT8, a)
}

/// `atan(a)`, 8 segments of degree 5.
#[inline]
pub fn atan_poly5_lut8(a: i32) -> i32 {
    lut8(&ATAN_POLY5_LUT8, a)
}
