//! Macros for declaring automata as tables.

/// Build an automaton from a declarative table.
///
/// Expands to [`AutomatonBuilder`](crate::builder::AutomatonBuilder) calls and
/// evaluates to `Result<Automaton<_>, AutomatonError>`. State names are
/// string slices; each transition row lists the symbols that share one move.
///
/// # Example
///
/// ```
/// use dfa_engine::dfa;
///
/// let odd_ones = dfa! {
///     states: ["even", "odd"],
///     accept: ["odd"],
///     start: "even",
///     transitions: [
///         ("even", ['1'], "odd"),
///         ("odd", ['1'], "even"),
///         ("even", ['0'], "even"),
///         ("odd", ['0'], "odd"),
///     ],
/// }
/// .unwrap();
///
/// assert_eq!(odd_ones.simulate("0100".chars()), Ok(true));
/// assert_eq!(odd_ones.simulate("11".chars()), Ok(false));
/// ```
#[macro_export]
macro_rules! dfa {
    (
        states: [$($state:expr),* $(,)?],
        accept: [$($accept:expr),* $(,)?],
        start: $start:expr,
        transitions: [
            $(($from:expr, [$($symbol:expr),* $(,)?], $to:expr)),* $(,)?
        ] $(,)?
    ) => {{
        let accepting: &[&str] = &[$($accept),*];
        $crate::builder::AutomatonBuilder::new()
            $(.state($state, accepting.contains(&$state)))*
            .start($start)
            $(.transitions($from, [$($symbol),*], $to))*
            .build()
    }};
}
