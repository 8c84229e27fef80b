use crate::qap::QapEvaluation;
use qapsnark_algebra::prelude::*;

/// Commit `scalar` into the group generated by `generator`, i.e. `scalar * generator`.
///
/// The multiplication walks a Montgomery ladder, so the group operations
/// performed do not depend on the bits of `scalar`.
pub fn commit<G: Group>(generator: &G, scalar: &G::ScalarType) -> G {
    generator.ladder_mul(scalar)
}

/// The five group elements the verifier checks.
///
/// `E(V)`, `E(T)` live in G1 and `E(W)`, `E(Y)`, `E(H)` in G2, so that both
/// sides of `e(E(V), E(W)) = e(g1, E(Y)) * e(E(T), E(H))` are well typed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "G1: Group, G2: Group",
    deserialize = "G1: Group, G2: Group"
))]
pub struct ProofBundle<G1, G2> {
    /// `E(V) = V(s) * g1`
    pub e_v: G1,
    /// `E(W) = W(s) * g2`
    pub e_w: G2,
    /// `E(Y) = Y(s) * g2`
    pub e_y: G2,
    /// `E(T) = T(s) * g1`
    pub e_t: G1,
    /// `E(H) = H(s) * g2`
    pub e_h: G2,
}

/// The proof bundle over the groups of a pairing engine.
pub type ProofBundleOf<P> = ProofBundle<<P as Pairing>::G1, <P as Pairing>::G2>;

impl<G1: Group, G2: Group> ProofBundle<G1, G2> {
    /// Concatenate the compressed encodings in the order `E(V), E(W), E(Y), E(T), E(H)`.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(2 * G1::COMPRESSED_LEN + 3 * G2::COMPRESSED_LEN);
        bytes.extend(self.e_v.to_compressed_bytes());
        bytes.extend(self.e_w.to_compressed_bytes());
        bytes.extend(self.e_y.to_compressed_bytes());
        bytes.extend(self.e_t.to_compressed_bytes());
        bytes.extend(self.e_h.to_compressed_bytes());
        bytes
    }

    /// Parse the output of [`ProofBundle::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, AlgebraError> {
        let (l1, l2) = (G1::COMPRESSED_LEN, G2::COMPRESSED_LEN);
        if bytes.len() != 2 * l1 + 3 * l2 {
            return Err(AlgebraError::DeserializationError);
        }
        let (e_v, rest) = bytes.split_at(l1);
        let (e_w, rest) = rest.split_at(l2);
        let (e_y, rest) = rest.split_at(l2);
        let (e_t, e_h) = rest.split_at(l1);
        Ok(Self {
            e_v: G1::from_compressed_bytes(e_v)?,
            e_w: G2::from_compressed_bytes(e_w)?,
            e_y: G2::from_compressed_bytes(e_y)?,
            e_t: G1::from_compressed_bytes(e_t)?,
            e_h: G2::from_compressed_bytes(e_h)?,
        })
    }
}

/// Commit an evaluated QAP together with `T(s)` and `H(s)`.
pub fn commit_qap<P: Pairing>(
    evaluation: &QapEvaluation<P::ScalarField>,
    t_at_s: &P::ScalarField,
    h_at_s: &P::ScalarField,
    g1: &P::G1,
    g2: &P::G2,
) -> ProofBundleOf<P> {
    #[cfg(feature = "parallel")]
    let ((e_v, e_t), (e_w, (e_y, e_h))) = rayon::join(
        || (commit(g1, &evaluation.v), commit(g1, t_at_s)),
        || {
            (
                commit(g2, &evaluation.w),
                (commit(g2, &evaluation.y), commit(g2, h_at_s)),
            )
        },
    );
    #[cfg(not(feature = "parallel"))]
    let ((e_v, e_t), (e_w, (e_y, e_h))) = (
        (commit(g1, &evaluation.v), commit(g1, t_at_s)),
        (
            commit(g2, &evaluation.w),
            (commit(g2, &evaluation.y), commit(g2, h_at_s)),
        ),
    );

    ProofBundle {
        e_v,
        e_w,
        e_y,
        e_t,
        e_h,
    }
}

/// Commit `sum_i scalars[i] * bases[i]` for bases already carrying the secret point.
pub(crate) fn commit_in_exponent<G: Group>(bases: &[G], scalars: &[G::ScalarType]) -> G {
    let scalars_ref = scalars.iter().collect::<Vec<_>>();
    let bases_ref = bases.iter().collect::<Vec<_>>();
    G::multi_exp(&scalars_ref, &bases_ref)
}
