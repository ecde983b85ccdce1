use displaydoc::Display;

#[derive(Default, PartialEq, Debug, Display)]
pub enum Status {
    /// not solved
    #[default]
    NotSolved,
    /// source or sink does not designate a usable node
    BadInput,
    /// flow is maximum
    Optimal,
}
