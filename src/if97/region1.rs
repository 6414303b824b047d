//! Region 1: compressed liquid, 273.15 K ≤ T ≤ 623.15 K, psat(T) ≤ p ≤ 100 MPa.
//!
//! The forward equation is a dimensionless Gibbs free energy γ(π, τ) with
//! 34 terms (IAPWS-IF97 Table 2). Backward correlations recover temperature
//! from pressure and enthalpy (Table 6) or entropy (Table 8) to within about
//! 1e-2 K; route through the crate's backward refiner when more precision is
//! needed.

use super::{GAS_CONSTANT, PropertySet};

const I: [i32; 34] = [
    0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 2, 3, 3, 3, 4, 4, 4, 5, 8, 8, 21, 23,
    29, 30, 31, 32,
];
const J: [i32; 34] = [
    -2, -1, 0, 1, 2, 3, 4, 5, -9, -7, -1, 0, 1, 3, -3, 0, 1, 3, 17, -4, 0, 6, -5, -2, 10, -8, -11,
    -6, -29, -31, -38, -39, -40, -41,
];
const N: [f64; 34] = [
    0.14632971213167,
    -0.84548187169114,
    -3.756360367204,
    3.3855169168385,
    -0.95791963387872,
    0.15772038513228,
    -0.016616417199501,
    8.1214629983568e-4,
    2.8319080123804e-4,
    -6.0706301565874e-4,
    -0.018990068218419,
    -0.032529748770505,
    -0.021841717175414,
    -5.283835796993e-5,
    -4.7184321073267e-4,
    -3.0001780793026e-4,
    4.7661393906987e-5,
    -4.4141845330846e-6,
    -7.2694996297594e-16,
    -3.1679644845054e-5,
    -2.8270797985312e-6,
    -8.5205128120103e-10,
    -2.2425281908e-6,
    -6.5171222895601e-7,
    -1.4341729937924e-13,
    -4.0516996860117e-7,
    -1.2734301741641e-9,
    -1.7424871230634e-10,
    -6.8762131295531e-19,
    1.4478307828521e-20,
    2.6335781662795e-23,
    -1.1947622640071e-23,
    1.8228094581404e-24,
    -9.3537087292458e-26,
];

/// Evaluates the full region 1 property set at (p, T).
pub fn properties(pressure: f64, temperature: f64) -> PropertySet {
    let pi = pressure / 16.53;
    let tau = 1386.0 / temperature;

    let mut gamma = 0.0;
    let mut gamma_pi = 0.0;
    let mut gamma_tau = 0.0;
    for i in 0..34 {
        let p_term = (7.1 - pi).powi(I[i]);
        let t_term = (tau - 1.222).powi(J[i]);
        gamma += N[i] * p_term * t_term;
        gamma_pi -= N[i] * f64::from(I[i]) * (7.1 - pi).powi(I[i] - 1) * t_term;
        gamma_tau += N[i] * p_term * f64::from(J[i]) * (tau - 1.222).powi(J[i] - 1);
    }

    let rt = GAS_CONSTANT * temperature;
    let specific_volume = rt / pressure * pi * gamma_pi / 1000.0;
    PropertySet {
        pressure,
        temperature,
        specific_volume,
        density: 1.0 / specific_volume,
        internal_energy: rt * (tau * gamma_tau - pi * gamma_pi),
        enthalpy: rt * tau * gamma_tau,
        entropy: GAS_CONSTANT * (tau * gamma_tau - gamma),
    }
}

const T_PH_I: [i32; 20] = [0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 2, 2, 3, 3, 4, 5, 6];
const T_PH_J: [i32; 20] = [
    0, 1, 2, 6, 22, 32, 0, 1, 2, 3, 4, 10, 32, 10, 32, 10, 32, 32, 32, 32,
];
const T_PH_N: [f64; 20] = [
    -238.72489924521,
    404.21188637945,
    113.49746881718,
    -5.8457616048039,
    -1.528548241314e-4,
    -1.0866707695377e-6,
    -13.391744872602,
    43.211039183559,
    -54.010067170506,
    30.535892203916,
    -6.5964749423638,
    9.3965400878363e-3,
    1.157364750534e-7,
    -2.5858641282073e-5,
    -4.0644363084799e-9,
    6.6456186191635e-8,
    8.0670734103027e-11,
    -9.3477771213947e-13,
    5.8265442020601e-15,
    -1.5020185953503e-17,
];

/// Backward correlation T(p, h), K.
pub fn temperature_ph(pressure: f64, enthalpy: f64) -> f64 {
    let eta = enthalpy / 2500.0;
    let mut t = 0.0;
    for i in 0..20 {
        t += T_PH_N[i] * pressure.powi(T_PH_I[i]) * (eta + 1.0).powi(T_PH_J[i]);
    }
    t
}

const T_PS_I: [i32; 20] = [0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 2, 3, 3, 4];
const T_PS_J: [i32; 20] = [
    0, 1, 2, 3, 11, 31, 0, 1, 2, 3, 12, 31, 0, 1, 2, 9, 31, 10, 32, 32,
];
const T_PS_N: [f64; 20] = [
    174.78268058307,
    34.806930892873,
    6.5292584978455,
    0.33039981775489,
    -1.9281382923196e-7,
    -2.4909197244573e-23,
    -0.26107636489332,
    0.22592965981586,
    -0.064256463395226,
    7.8876289270526e-3,
    3.5672110607366e-10,
    1.7332496994895e-24,
    5.6608900654837e-4,
    -3.2635483139717e-4,
    4.4778286690632e-5,
    -5.1322156908507e-10,
    -4.2522657042207e-26,
    2.6400441360689e-13,
    7.8124600459723e-29,
    -3.0732199903668e-31,
];

/// Backward correlation T(p, s), K.
pub fn temperature_ps(pressure: f64, entropy: f64) -> f64 {
    let mut t = 0.0;
    for i in 0..20 {
        t += T_PS_N[i] * pressure.powi(T_PS_I[i]) * (entropy + 2.0).powi(T_PS_J[i]);
    }
    t
}
