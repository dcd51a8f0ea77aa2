pub mod seeta_face_finder;
