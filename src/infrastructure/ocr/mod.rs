mod tesseract_recognizer;

pub use tesseract_recognizer::TesseractRecognizer;
