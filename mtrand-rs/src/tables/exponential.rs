//! TDR-PS calibration data for the standard exponential density.
//!
//! Transformation `-1/sqrt(x)`, hat/squeeze ratio 1.01009. Generated by
//! ANURAN 0.4.0 (Hoermann and Leydold, 2001); treat as opaque constants.

#![allow(clippy::excessive_precision)]

use super::TdrInterval;

pub const EXPONENTIAL_TOTAL_AREA: f64 = 1.00252262117861956625e+00;

#[rustfmt::skip]
pub const EXPONENTIAL_GUIDE: [usize; 36] = [
    0, 1, 1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 3, 3, 3, 3,
    4, 4, 4, 4, 5, 5, 5, 6, 6, 6, 6, 7, 7, 7, 8, 8,
    9, 10, 11, 12,
];

#[rustfmt::skip]
pub const EXPONENTIAL_INTERVALS: [TdrInterval; 18] = [
    TdrInterval::new(0.00000000000000000000e+00, -1.00000000000000000000e+00, 0.00000000000000000000e+00,
                     9.94966310351490967889e-01, 5.04640133999638505063e-03, 5.04640133999638505063e-03),
    TdrInterval::new(1.43778293994973327408e-01, -1.07453622189490416439e+00, -5.37268110947452082193e-01,
                     9.94966310351490967889e-01, 1.97454561833268177340e-01, 6.32995368581108636130e-02),
    TdrInterval::new(2.93626492938366734364e-01, -1.15813765653595335259e+00, -5.79068828267976787316e-01,
                     9.98339784436144461743e-01, 3.13901858109879250414e-01, 5.91656506560962955343e-02),
    TdrInterval::new(4.56684697903555258947e-01, -1.25651541854361137318e+00, -6.28257709271805686591e-01,
                     9.97840895257005144892e-01, 4.24086118761153652024e-01, 5.71129222487708754219e-02),
    TdrInterval::new(6.42660977168331037923e-01, -1.37896123654179536544e+00, -6.89480618270897793742e-01,
                     9.96873809158741464032e-01, 5.31262428984949575117e-01, 5.67230080487255497457e-02),
    TdrInterval::new(8.66504932543062933448e-01, -1.54226554158436379716e+00, -7.71132770792181898578e-01,
                     9.94846757429172390275e-01, 6.37773438130784464661e-01, 5.76512531568919295299e-02),
    TdrInterval::new(1.15406152053300958826e+00, -1.78074311989010181101e+00, -8.90371559945050905505e-01,
                     9.89957739408934611625e-01, 7.44707794706255477024e-01, 5.93399650688105073648e-02),
    TdrInterval::new(1.55603037297544188888e+00, -2.17714674396579788151e+00, -1.08857337198289894076e+00,
                     9.89957739408934722647e-01, 8.19969841944865773797e-01, 2.98705942205700590575e-02),
    TdrInterval::new(1.85340868375921985489e+00, -2.52617005086868440245e+00, -1.26308502543434220122e+00,
                     9.92959661719902797472e-01, 8.69400432331340011771e-01, 2.49316361350136392327e-02),
    TdrInterval::new(2.18969456298968090380e+00, -2.98872621473879940268e+00, -1.49436310736939970134e+00,
                     9.82156679928096298937e-01, 9.16864539116104770855e-01, 2.75394365924386264055e-02),
    TdrInterval::new(2.72668540177169127503e+00, -3.90923890221935366185e+00, -1.95461945110967683092e+00,
                     9.82156679928096409959e-01, 9.45967459188376547097e-01, 9.84980453285222087856e-03),
    TdrInterval::new(3.04386019488875891881e+00, -4.58105855718896037843e+00, -2.29052927859448018921e+00,
                     9.91854645890511421591e-01, 9.62063526872434904291e-01, 8.12346026389826336711e-03),
    TdrInterval::new(3.40568723888924873577e+00, -5.48953536760089555457e+00, -2.74476768380044822138e+00,
                     9.86990867644772174039e-01, 9.75495243667458655779e-01, 7.04926198632332533939e-03),
    TdrInterval::new(3.86357842029393871996e+00, -6.90184805739440943029e+00, -3.45092402869720427105e+00,
                     9.80801480027605587786e-01, 9.86031675467863744089e-01, 5.34145710718992531435e-03),
    TdrInterval::new(4.42080140328206638856e+00, -9.11936980747388581392e+00, -4.55968490373694290696e+00,
                     9.58591272224841528526e-01, 9.94052325266385761182e-01, 4.33638923469708247038e-03),
    TdrInterval::new(5.24435420041824507109e+00, -1.37656602074564879956e+01, -6.88283010372824310963e+00,
                     8.34353860856009821312e-01, 1.00001819316937967663e+00, 3.46114307429970209998e-03),
    TdrInterval::new(6.95515277177346380455e+00, -3.23811474910259846638e+01, -1.61905737455129923319e+01,
                     6.93320883316056596479e-02, 1.00250692603598245967e+00, 1.38068630916977756230e-03),
    TdrInterval::new(1.39818269551057401401e+01, -1.08671371150643471992e+03, -5.43356855753217246274e+02,
                     0.00000000000000000000e+00, 1.00252262117861956625e+00, 1.69355654715086842653e-06),
];
