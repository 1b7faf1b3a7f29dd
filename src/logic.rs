use varisat::{Lit, Var};

/// Exactly one of the pair is true: `(A + B)(!A + !B)`.
pub(crate) fn exactly_one_of(a: Var, b: Var) -> Vec<Vec<Lit>> {
    vec![
        vec![a.positive(), b.positive()],
        vec![a.negative(), b.negative()],
    ]
}

/// `A` and `B` take the same value: `(!A + B)(A + !B)`.
pub(crate) fn same_value(a: Var, b: Var) -> Vec<Vec<Lit>> {
    vec![
        vec![a.negative(), b.positive()],
        vec![a.positive(), b.negative()],
    ]
}

/// At most one of `A` and `B` is true.
pub(crate) fn not_both(a: Var, b: Var) -> Vec<Lit> {
    vec![a.negative(), b.negative()]
}

/// `antecedent` being true implies at least one of `consequents` is true:
/// `!A + C_1 + C_2 + ...`.
pub(crate) fn implies_any(antecedent: Var, consequents: impl IntoIterator<Item = Var>) -> Vec<Lit> {
    let mut clause = vec![antecedent.negative()];
    clause.extend(consequents.into_iter().map(|var| var.positive()));
    clause
}

/// Not all of `vars` are true at once, i.e. their sum stays below
/// `|vars|`.
pub(crate) fn not_all(vars: impl IntoIterator<Item = Var>) -> Vec<Lit> {
    vars.into_iter().map(|var| var.negative()).collect()
}
