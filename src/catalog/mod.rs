//! Species definitions, one module per species.

mod alpnac;
mod ascput;
mod basrex;
mod beralp;
mod bresta;
mod drafeu;
mod erlkoe;
mod feeflu;
mod frahol;
mod heicol;
mod hexwal;
mod jotrie;
mod kobhau;
mod lindra;
mod lorrhe;
mod maslak;
mod moobay;
mod muegei;
mod nixrhe;
mod ostbal;
mod pombal;
mod pukpru;
mod ruehar;
mod rumsti;
mod saxerz;
mod schwar;
mod sierab;
mod valkri;
mod werwol;
mod wiljae;
mod wolbay;
mod zweberg;

use crate::species::Species;

/// Every species in the catalog, sorted by id.
pub(crate) fn all() -> Vec<Species> {
    vec![
        alpnac::species(),
        ascput::species(),
        basrex::species(),
        beralp::species(),
        bresta::species(),
        drafeu::species(),
        erlkoe::species(),
        feeflu::species(),
        frahol::species(),
        heicol::species(),
        hexwal::species(),
        jotrie::species(),
        kobhau::species(),
        lindra::species(),
        lorrhe::species(),
        maslak::species(),
        moobay::species(),
        muegei::species(),
        nixrhe::species(),
        ostbal::species(),
        pombal::species(),
        pukpru::species(),
        ruehar::species(),
        rumsti::species(),
        saxerz::species(),
        schwar::species(),
        sierab::species(),
        valkri::species(),
        werwol::species(),
        wiljae::species(),
        wolbay::species(),
        zweberg::species(),
    ]
}
