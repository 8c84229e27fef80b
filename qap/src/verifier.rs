use crate::commitment::ProofBundleOf;
use crate::errors::{QapError, Result};
use ark_std::{end_timer, start_timer};
use qapsnark_algebra::prelude::*;

/// Check `e(E(V), E(W)) = e(g1, E(Y)) * e(E(T), E(H))`.
///
/// The target group is written additively, so the right-hand product is a
/// group addition. Both sides are compared through their canonical encoding.
pub fn verify<P: Pairing>(bundle: &ProofBundleOf<P>, g1: &P::G1) -> bool {
    let verifier_timer = start_timer!(|| "QAP::Verifier");
    let lhs = P::pairing(&bundle.e_v, &bundle.e_w);
    let rhs = P::pairing(g1, &bundle.e_y).add(&P::pairing(&bundle.e_t, &bundle.e_h));
    let accepted = lhs.to_compressed_bytes() == rhs.to_compressed_bytes();
    end_timer!(verifier_timer);
    accepted
}

/// Like [`verify`], reporting a failed check as [`QapError::ProofRejected`].
pub fn verify_proof<P: Pairing>(bundle: &ProofBundleOf<P>, g1: &P::G1) -> Result<()> {
    if verify::<P>(bundle, g1) {
        Ok(())
    } else {
        Err(QapError::ProofRejected)
    }
}

/// Check the same equation with a single multi-pairing,
/// `e(E(V), E(W)) * e(-g1, E(Y)) * e(-E(T), E(H)) = 1`.
pub fn verify_with_multi_pairing<P: Pairing>(bundle: &ProofBundleOf<P>, g1: &P::G1) -> bool {
    let verifier_timer = start_timer!(|| "QAP::Verifier with multi-pairing");
    let product = P::product_of_pairings(
        &[bundle.e_v, g1.neg(), bundle.e_t.neg()],
        &[bundle.e_w, bundle.e_y, bundle.e_h],
    );
    end_timer!(verifier_timer);
    product.is_identity()
}
