use thiserror::Error;

#[derive(Error, Debug)]
pub enum SvgError {
    #[error("XML parse error: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("Document element is <{0}>, expected <svg>")]
    NotSvg(String),

    #[error("No element with id '{0}'")]
    UnknownId(String),
}
