use crate::controllers::interactive::data::frame_data::FrameData;
use std::error::Error;

pub type PresentError = Box<dyn Error + Send + Sync>;

pub trait FramePresenterPort {
    fn present(&mut self, frame: &FrameData) -> Result<(), PresentError>;
}
