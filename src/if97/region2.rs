//! Region 2: superheated vapor, up to 1073.15 K and 100 MPa.
//!
//! The forward equation is a dimensionless Gibbs free energy split into an
//! ideal-gas part γ°(π, τ) (IAPWS-IF97 Table 10) and a residual part
//! γʳ(π, τ) (Table 11). The backward correlations cover the three
//! sub-regions 2a/2b/2c by enthalpy (Tables 20-22) and by entropy
//! (Tables 25-27).

use super::{GAS_CONSTANT, PropertySet};

const J0: [i32; 9] = [0, 1, -5, -4, -3, -2, -1, 2, 3];
const N0: [f64; 9] = [
    -9.6927686500217,
    10.086655968018,
    -0.005608791128302,
    0.071452738081455,
    -0.40710498223928,
    1.4240819171444,
    -4.383951131945,
    -0.28408632460772,
    0.021268463753307,
];

const IR: [i32; 43] = [
    1, 1, 1, 1, 1, 2, 2, 2, 2, 2, 3, 3, 3, 3, 3, 4, 4, 4, 5, 6, 6, 6, 7, 7, 7, 8, 8, 9, 10, 10,
    10, 16, 16, 18, 20, 20, 20, 21, 22, 23, 24, 24, 24,
];
const JR: [i32; 43] = [
    0, 1, 2, 3, 6, 1, 2, 4, 7, 36, 0, 1, 3, 6, 35, 1, 2, 3, 7, 3, 16, 35, 0, 11, 25, 8, 36, 13, 4,
    10, 14, 29, 50, 57, 20, 35, 48, 21, 53, 39, 26, 40, 58,
];
const NR: [f64; 43] = [
    -1.7731742473213e-3,
    -0.017834862292358,
    -0.045996013696365,
    -0.057581259083432,
    -0.05032527872793,
    -3.3032641670203e-5,
    -1.8948987516315e-4,
    -3.9392777243355e-3,
    -0.043797295650573,
    -2.6674547914087e-5,
    2.0481737692309e-8,
    4.3870667284435e-7,
    -3.227767723857e-5,
    -1.5033924542148e-3,
    -0.040668253562649,
    -7.8847309559367e-10,
    1.2790717852285e-8,
    4.8225372718507e-7,
    2.2922076337661e-6,
    -1.6714766451061e-11,
    -2.1171472321355e-3,
    -23.895741934104,
    -5.905956432427e-18,
    -1.2621808899101e-6,
    -0.038946842435739,
    1.1256211360459e-11,
    -8.2311340897998,
    1.9809712802088e-8,
    1.0406965210174e-19,
    -1.0234747095929e-13,
    -1.0018179379511e-9,
    -8.0882908646985e-11,
    0.10693031879409,
    -0.33662250574171,
    8.9185845355421e-25,
    3.0629316876232e-13,
    -4.2002467698208e-6,
    -5.9056029685639e-26,
    3.7826947613457e-6,
    -1.2768608934681e-15,
    7.3087610595061e-29,
    5.5414715350778e-17,
    -9.436970724121e-7,
];

/// Evaluates the full region 2 property set at (p, T).
pub fn properties(pressure: f64, temperature: f64) -> PropertySet {
    let pi = pressure;
    let tau = 540.0 / temperature;

    let mut g0 = pi.ln();
    let mut g0_tau = 0.0;
    for i in 0..9 {
        g0 += N0[i] * tau.powi(J0[i]);
        g0_tau += N0[i] * f64::from(J0[i]) * tau.powi(J0[i] - 1);
    }

    let mut gr = 0.0;
    let mut gr_pi = 0.0;
    let mut gr_tau = 0.0;
    for i in 0..43 {
        let p_term = pi.powi(IR[i]);
        let t_term = (tau - 0.5).powi(JR[i]);
        gr += NR[i] * p_term * t_term;
        gr_pi += NR[i] * f64::from(IR[i]) * pi.powi(IR[i] - 1) * t_term;
        gr_tau += NR[i] * p_term * f64::from(JR[i]) * (tau - 0.5).powi(JR[i] - 1);
    }

    let g0_pi = 1.0 / pi;
    let rt = GAS_CONSTANT * temperature;
    let specific_volume = rt / pressure * pi * (g0_pi + gr_pi) / 1000.0;
    PropertySet {
        pressure,
        temperature,
        specific_volume,
        density: 1.0 / specific_volume,
        internal_energy: rt * (tau * (g0_tau + gr_tau) - pi * (g0_pi + gr_pi)),
        enthalpy: rt * tau * (g0_tau + gr_tau),
        entropy: GAS_CONSTANT * (tau * (g0_tau + gr_tau) - (g0 + gr)),
    }
}

const T_PH_2A_I: [i32; 34] = [
    0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 2, 2, 2, 2, 3, 3, 4, 4, 4, 5, 5, 5,
    6, 6, 7,
];
const T_PH_2A_J: [i32; 34] = [
    0, 1, 2, 3, 7, 20, 0, 1, 2, 3, 7, 9, 11, 18, 44, 0, 2, 7, 36, 38, 40, 42, 44, 24, 44, 12, 32,
    44, 32, 36, 42, 34, 44, 28,
];
const T_PH_2A_N: [f64; 34] = [
    1089.8952318288,
    849.51654495535,
    -107.81748091826,
    33.153654801263,
    -7.4232016790248,
    11.765048724356,
    1.844574935579,
    -4.1792700549624,
    6.2478196935812,
    -17.344563108114,
    -200.58176862096,
    271.96065473796,
    -455.11318285818,
    3091.9688604755,
    252266.40357872,
    -6.1707422868339e-3,
    -0.31078046629583,
    11.670873077107,
    128127984.04046,
    -985549096.23276,
    2822454697.3002,
    -3594897141.0703,
    1722734991.3197,
    -13551.334240775,
    12848734.66465,
    1.3865724283226,
    235988.32556514,
    -13105236.545054,
    7399.9835474766,
    -551966.9703006,
    3715408.5996233,
    19127.72923966,
    -415351.64835634,
    -62.459855192507,
];

/// Backward correlation T(p, h) for sub-region 2a (p ≤ 4 MPa), K.
pub fn temperature_ph_2a(pressure: f64, enthalpy: f64) -> f64 {
    let eta = enthalpy / 2000.0;
    let mut t = 0.0;
    for i in 0..34 {
        t += T_PH_2A_N[i] * pressure.powi(T_PH_2A_I[i]) * (eta - 2.1).powi(T_PH_2A_J[i]);
    }
    t
}

const T_PH_2B_I: [i32; 38] = [
    0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 3, 3, 3, 3, 4, 4, 4, 4, 4, 4, 5,
    5, 5, 6, 7, 7, 9, 9,
];
const T_PH_2B_J: [i32; 38] = [
    0, 1, 2, 12, 18, 24, 28, 40, 0, 2, 6, 12, 18, 24, 28, 40, 2, 8, 18, 40, 1, 2, 12, 24, 2, 12,
    18, 24, 28, 40, 18, 24, 40, 28, 2, 28, 1, 40,
];
const T_PH_2B_N: [f64; 38] = [
    1489.5041079516,
    743.07798314034,
    -97.708318797837,
    2.4742464705674,
    -0.63281320016026,
    1.1385952129658,
    -0.47811863648625,
    8.5208123431544e-3,
    0.93747147377932,
    3.3593118604916,
    3.3809355601454,
    0.16844539671904,
    0.73875745236695,
    -0.47128737436186,
    0.15020273139707,
    -2.176411421975e-3,
    -0.021810755324761,
    -0.10829784403677,
    -0.046333324635812,
    7.1280351959551e-5,
    1.1032831789999e-4,
    1.8955248387902e-4,
    3.0891541160537e-3,
    1.3555504554949e-3,
    2.8640237477456e-7,
    -1.0779857357512e-5,
    -7.6462712454814e-5,
    1.4052392818316e-5,
    -3.1083814331434e-5,
    -1.0302738212103e-6,
    2.821728163504e-7,
    1.2704902271945e-6,
    7.3803353468292e-8,
    -1.1030139238909e-8,
    -8.1456365207833e-14,
    -2.5180545682962e-11,
    -1.7565233969407e-18,
    8.6934156344163e-15,
];

/// Backward correlation T(p, h) for sub-region 2b, K.
pub fn temperature_ph_2b(pressure: f64, enthalpy: f64) -> f64 {
    let eta = enthalpy / 2000.0;
    let mut t = 0.0;
    for i in 0..38 {
        t += T_PH_2B_N[i] * (pressure - 2.0).powi(T_PH_2B_I[i]) * (eta - 2.6).powi(T_PH_2B_J[i]);
    }
    t
}

const T_PH_2C_I: [i32; 23] = [
    -7, -7, -6, -6, -5, -5, -2, -2, -1, -1, 0, 0, 1, 1, 2, 6, 6, 6, 6, 6, 6, 6, 6,
];
const T_PH_2C_J: [i32; 23] = [
    0, 4, 0, 2, 0, 2, 0, 1, 0, 2, 0, 1, 4, 8, 4, 0, 1, 4, 10, 12, 16, 20, 22,
];
const T_PH_2C_N: [f64; 23] = [
    -3236839855524.2,
    7326335090218.1,
    358250899454.47,
    -583401318515.9,
    -10783068217.47,
    20825544563.171,
    610747.83564516,
    859777.2253558,
    -25745.72360417,
    31081.088422714,
    1208.2315865936,
    482.19755109255,
    3.7966001272486,
    -10.842984880077,
    -0.04536417267666,
    1.4559115658698e-13,
    1.126159740723e-12,
    -1.7804982240686e-11,
    1.2324579690832e-7,
    -1.1606921130984e-6,
    2.7846367088554e-5,
    -5.9270038474176e-4,
    1.2918582991878e-3,
];

/// Backward correlation T(p, h) for sub-region 2c, K.
pub fn temperature_ph_2c(pressure: f64, enthalpy: f64) -> f64 {
    let eta = enthalpy / 2000.0;
    let mut t = 0.0;
    for i in 0..23 {
        t += T_PH_2C_N[i] * (pressure + 25.0).powi(T_PH_2C_I[i]) * (eta - 1.8).powi(T_PH_2C_J[i]);
    }
    t
}

const T_PS_2A_I: [f64; 46] = [
    -1.5, -1.5, -1.5, -1.5, -1.5, -1.5, -1.25, -1.25, -1.25, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0,
    -0.75, -0.75, -0.5, -0.5, -0.5, -0.5, -0.25, -0.25, -0.25, -0.25, 0.25, 0.25, 0.25, 0.25, 0.5,
    0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 0.75, 0.75, 0.75, 0.75, 1.0, 1.0, 1.25, 1.25, 1.5, 1.5,
];
const T_PS_2A_J: [i32; 46] = [
    -24, -23, -19, -13, -11, -10, -19, -15, -6, -26, -21, -17, -16, -9, -8, -15, -14, -26, -13,
    -9, -7, -27, -25, -11, -6, 1, 4, 8, 11, 0, 1, 5, 6, 10, 14, 16, 0, 4, 9, 17, 7, 18, 3, 15, 5,
    18,
];
const T_PS_2A_N: [f64; 46] = [
    -392359.83861984,
    515265.7382727,
    40482.443161048,
    -321.93790923902,
    96.961424218694,
    -22.867846371773,
    -449429.14124357,
    -5011.8336020166,
    0.35684463560015,
    44235.33584819,
    -13673.388811708,
    421632.60207864,
    22516.925837475,
    474.42144865646,
    -149.31130797647,
    -197811.26320452,
    -23554.39947076,
    -19070.616302076,
    55375.669883164,
    3829.3691437363,
    -603.91860580567,
    1936.3102620331,
    4266.064369861,
    -5978.0638872718,
    -704.01463926862,
    338.36784107553,
    20.862786635187,
    0.033834172656196,
    -4.3124428414893e-5,
    166.53791356412,
    -139.86292055898,
    -0.78849547999872,
    0.072132411753872,
    -5.9754839398283e-3,
    -1.2141358953904e-5,
    2.3227096733871e-7,
    -10.538463566194,
    2.0718925496502,
    -0.072193155260427,
    2.074988708112e-7,
    -0.018340657911379,
    2.9036272348696e-7,
    0.21037527893619,
    2.5681239729999e-4,
    -0.012799002933781,
    -8.2198102652018e-6,
];

/// Backward correlation T(p, s) for sub-region 2a (p ≤ 4 MPa), K.
pub fn temperature_ps_2a(pressure: f64, entropy: f64) -> f64 {
    let sigma = entropy / 2.0;
    let mut t = 0.0;
    for i in 0..46 {
        t += T_PS_2A_N[i] * pressure.powf(T_PS_2A_I[i]) * (sigma - 2.0).powi(T_PS_2A_J[i]);
    }
    t
}

const T_PS_2B_I: [i32; 44] = [
    -6, -6, -5, -5, -4, -4, -4, -3, -3, -3, -3, -2, -2, -2, -2, -1, -1, -1, -1, -1, 0, 0, 0, 0, 0,
    0, 0, 1, 1, 1, 1, 1, 1, 2, 2, 2, 3, 3, 3, 4, 4, 5, 5, 5,
];
const T_PS_2B_J: [i32; 44] = [
    0, 11, 0, 11, 0, 1, 11, 0, 1, 11, 12, 0, 1, 6, 10, 0, 1, 5, 8, 9, 0, 1, 2, 4, 5, 6, 9, 0, 1,
    2, 3, 7, 8, 0, 1, 5, 0, 1, 3, 0, 1, 0, 1, 2,
];
const T_PS_2B_N: [f64; 44] = [
    316876.65083497,
    20.864175881858,
    -398593.99803599,
    -21.816058518877,
    223697.85194242,
    -2784.1703445817,
    9.920743607148,
    -75197.512299157,
    2970.8605951158,
    -3.4406878548526,
    0.38815564249115,
    17511.29508575,
    -1423.7112854449,
    1.0943803364167,
    0.89971619308495,
    -3375.9740098958,
    471.62885818355,
    -1.9188241993679,
    0.41078580492196,
    -0.33465378172097,
    1387.0034777505,
    -406.63326195838,
    41.72734715961,
    2.1932549434532,
    -1.0320050009077,
    0.35882943516703,
    5.2511453726066e-3,
    12.838916450705,
    -2.8642437219381,
    0.56912683664855,
    -0.099962954584931,
    -3.2632037778459e-3,
    2.3320922576723e-4,
    -0.1533480985745,
    0.029072288239902,
    3.7534702741167e-4,
    1.7296691702411e-3,
    -3.8556050844504e-4,
    -3.5017712292608e-5,
    -1.4566393631492e-5,
    5.6420857267269e-6,
    4.1286150074605e-8,
    -2.0684671118824e-8,
    1.6409393674725e-9,
];

/// Backward correlation T(p, s) for sub-region 2b (s ≥ 5.85 kJ/kg·K), K.
pub fn temperature_ps_2b(pressure: f64, entropy: f64) -> f64 {
    let sigma = entropy / 0.7853;
    let mut t = 0.0;
    for i in 0..44 {
        t += T_PS_2B_N[i] * pressure.powi(T_PS_2B_I[i]) * (10.0 - sigma).powi(T_PS_2B_J[i]);
    }
    t
}

const T_PS_2C_I: [i32; 30] = [
    -2, -2, -1, 0, 0, 0, 0, 1, 1, 1, 1, 2, 2, 2, 3, 3, 3, 4, 4, 4, 5, 5, 5, 6, 6, 7, 7, 7, 7, 7,
];
const T_PS_2C_J: [i32; 30] = [
    0, 1, 0, 0, 1, 2, 3, 0, 1, 3, 4, 0, 1, 2, 0, 1, 5, 0, 1, 4, 0, 1, 2, 0, 1, 0, 1, 3, 4, 5,
];
const T_PS_2C_N: [f64; 30] = [
    909.68501005365,
    2404.566708842,
    -591.6232638713,
    541.45404128074,
    -270.98308411192,
    979.76525097926,
    -469.66772959435,
    14.399274604723,
    -19.104204230429,
    5.3299167111971,
    -21.252975375934,
    -0.3114733441376,
    0.60334840894623,
    -0.042764839702509,
    5.8185597255259e-3,
    -0.014597008284753,
    5.6631175631027e-3,
    -7.6155864584577e-5,
    2.2440342919332e-4,
    -1.2561095013413e-5,
    6.3323132660934e-7,
    -2.0541989675375e-6,
    3.6405370390082e-8,
    -2.9759897789215e-9,
    1.0136618529763e-8,
    5.9925719692351e-12,
    -2.0677870105164e-11,
    -2.0874278181886e-11,
    1.0162166825089e-10,
    -1.6429828281347e-10,
];

/// Backward correlation T(p, s) for sub-region 2c (s < 5.85 kJ/kg·K), K.
pub fn temperature_ps_2c(pressure: f64, entropy: f64) -> f64 {
    let sigma = entropy / 2.9251;
    let mut t = 0.0;
    for i in 0..30 {
        t += T_PS_2C_N[i] * pressure.powi(T_PS_2C_I[i]) * (2.0 - sigma).powi(T_PS_2C_J[i]);
    }
    t
}

/// The B2bc discriminant line separating sub-regions 2b and 2c in the
/// pressure-enthalpy plane, MPa.
///
/// Enthalpy queries above 4 MPa fall in 2b when this line lies above the
/// query pressure and in 2c otherwise.
pub fn b2bc_pressure(enthalpy: f64) -> f64 {
    905.84278514723 - 0.67955786399241 * enthalpy + 1.2809002730136e-4 * enthalpy * enthalpy
}
