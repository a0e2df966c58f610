//! Static text of the lab pages.
//!
//! Paragraphs are plain text; the front end escapes them before insertion.

use serde::Serialize;
use vlab_model::ExperimentKind;

/// Heading plus paragraphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Section {
    pub heading: &'static str,
    pub paragraphs: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Page {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub sections: &'static [Section],
}

/// Formula lines and explanation shown under an experiment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExperimentText {
    pub formulas: &'static [&'static str],
    pub explanation: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QaEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const HOME_TITLE: &str = "Welcome to Virtual Physics Lab";
pub const HOME_SUBTITLE: &str = "Explore physics concepts with interactive 3D experiments.";

pub const QA_TITLE: &str = "Physics Lab Q&A";
pub const QA_SUBTITLE: &str = "Review questions and answers for each experiment.";

pub fn experiment_text(kind: ExperimentKind) -> &'static ExperimentText {
    match kind {
        ExperimentKind::Projectile => &PROJECTILE_TEXT,
        ExperimentKind::Pendulum => &PENDULUM_TEXT,
        ExperimentKind::Lens => &LENS_TEXT,
        ExperimentKind::Wave => &WAVE_TEXT,
        ExperimentKind::Spring => &SPRING_TEXT,
    }
}

static PROJECTILE_TEXT: ExperimentText = ExperimentText {
    formulas: &[
        "R = (u² · sin(2θ)) / g",
        "H = (u² · sin²θ) / (2g)",
        "T = (2u · sinθ) / g",
    ],
    explanation: &[
        "Projectile motion occurs when an object is launched into the air and moves under \
         the influence of gravity. Its horizontal velocity remains constant, while the \
         vertical velocity decreases due to gravity, creating a parabolic trajectory.",
        "The range (R) depends on velocity and angle, with maximum range at 45°. The maximum \
         height (H) depends on the vertical component of velocity. The time of flight (T) is \
         determined by how long gravity takes to bring the projectile back to the ground.",
    ],
};

static PENDULUM_TEXT: ExperimentText = ExperimentText {
    formulas: &["Period (small-angle): T = 2π √(L / g)", "Frequency: f = 1 / T"],
    explanation: &[
        "A simple pendulum consists of a bob suspended from a fixed pivot by a string of \
         length L. For small angular amplitudes (θ ≲ 10°) the motion approximates simple \
         harmonic motion.",
        "The angular frequency is ω = √(g / L). The period is T = 2π √(L/g). Frequency is the \
         reciprocal of the period. If amplitude becomes large, the small-angle approximation \
         breaks down and the true period increases slightly.",
        "Increasing L → slower swings. Decreasing L → faster swings.",
    ],
};

static LENS_TEXT: ExperimentText = ExperimentText {
    formulas: &[
        "Thin lens equation: 1/f = 1/v + 1/u",
        "Rearranged: v = 1 / (1/f − 1/u)",
        "Sign convention: v > 0 → real image (right of lens); v < 0 → virtual image (left).",
    ],
    explanation: &[
        "A convex lens refracts rays from an object at distance u to form an image at \
         distance v. We use the thin-lens equation above.",
        "Rays and markers are drawn above the grid along the optical axis for clarity.",
        "Move the sliders to see how changing u and f alters whether the image is real or \
         virtual, and how far it forms from the lens.",
    ],
};

static WAVE_TEXT: ExperimentText = ExperimentText {
    formulas: &["f = v / λ (here λ = 2π)", "T = 1 / f"],
    explanation: &[
        "This simulation shows a surface wave, where the crests and troughs move \
         dynamically. The amplitude controls the height of the waves, and the wave speed \
         affects how fast they move.",
        "The frequency is the number of oscillations per second, calculated as f = v / λ. \
         The period is the time for one full cycle: T = 1 / f.",
        "Increasing wave speed makes the ripples move faster, while increasing amplitude \
         makes the waves taller but doesn't affect their speed.",
    ],
};

static SPRING_TEXT: ExperimentText = ExperimentText {
    formulas: &["f = (1 / 2π) √(k / m)", "T = 1 / f"],
    explanation: &[
        "A spring-mass system consists of a block of mass m attached to a spring with \
         constant k. When displaced from equilibrium, the spring exerts a restoring force \
         following Hooke's Law: F = -kx.",
        "The motion is simple harmonic, with angular frequency ω = √(k/m). Thus the \
         frequency is f = (1 / 2π) √(k/m) and the period is T = 1/f.",
        "Increasing the spring constant k makes oscillations faster, while increasing the \
         mass m slows them down.",
    ],
};

pub fn qa_entries(kind: ExperimentKind) -> &'static [QaEntry] {
    match kind {
        ExperimentKind::Projectile => &QA_PROJECTILE,
        ExperimentKind::Pendulum => &QA_PENDULUM,
        ExperimentKind::Lens => &QA_LENS,
        ExperimentKind::Wave => &QA_WAVE,
        ExperimentKind::Spring => &QA_SPRING,
    }
}

const fn qa(question: &'static str, answer: &'static str) -> QaEntry {
    QaEntry { question, answer }
}

static QA_PROJECTILE: [QaEntry; 5] = [
    qa("What is the formula for range?", "R = (u² · sin(2θ)) / g"),
    qa("At what angle is range maximum?", "45° (without air resistance)."),
    qa("What factors affect time of flight?", "Initial velocity and angle of projection."),
    qa("Does mass of projectile affect trajectory?", "No, neglecting air resistance."),
    qa("What shape does the path follow?", "A parabola."),
];

static QA_PENDULUM: [QaEntry; 5] = [
    qa("What is the formula for period?", "T = 2π √(L/g)"),
    qa("Does mass of the bob affect the period?", "No, period depends only on L and g."),
    qa("What assumption is used in derivation?", "Small-angle approximation (θ ≤ 10°)."),
    qa("How does increasing length affect period?", "Increases period (slower swings)."),
    qa("What happens if amplitude is large?", "The small-angle approximation fails."),
];

static QA_LENS: [QaEntry; 5] = [
    qa("What is the lens formula?", "1/f = 1/v + 1/u"),
    qa("When is the image real?", "When v > 0 (image forms on the right side)."),
    qa("What is magnification formula?", "M = v/u"),
    qa("What happens if object is at 2f?", "Image is at 2f, same size, inverted."),
    qa(
        "What happens if object is within focal length?",
        "A virtual, erect, magnified image is formed.",
    ),
];

static QA_WAVE: [QaEntry; 5] = [
    qa("Formula for wave frequency?", "f = v/λ"),
    qa("What does amplitude control?", "Height of crests and troughs."),
    qa("What does wave speed control?", "How fast the wave propagates."),
    qa("What is the period formula?", "T = 1/f"),
    qa("What is a crest and trough?", "Crest = highest point, trough = lowest point."),
];

static QA_SPRING: [QaEntry; 5] = [
    qa("What is Hooke's Law?", "F = -kx"),
    qa("Frequency formula?", "f = (1/2π) √(k/m)"),
    qa("What is period formula?", "T = 1/f"),
    qa("Effect of increasing k?", "Faster oscillations (higher frequency)."),
    qa("Effect of increasing m?", "Slower oscillations (lower frequency)."),
];

pub static THEORY: Page = Page {
    title: "Physics Lab Theory",
    subtitle: "Deeper explanations of concepts, formulas, and real-life examples for each experiment.",
    sections: &[
        Section {
            heading: "Projectile Motion",
            paragraphs: &["Projectile motion refers to the curved path followed by an object \
                under the influence of gravity alone, after being given an initial velocity. Its \
                horizontal component of velocity remains constant, while the vertical velocity \
                changes due to gravity. The path traced is a parabola. The range is given by \
                R = (u² · sin(2θ)) / g, and maximum range occurs at 45°. The maximum height is \
                H = (u² · sin²θ) / 2g, and time of flight is T = (2u · sinθ) / g. Importantly, \
                mass of the object does not affect the trajectory (neglecting air resistance). \
                Real-life examples include throwing a ball, firing a cannon, or water jets in \
                fountains."],
        },
        Section {
            heading: "Pendulum",
            paragraphs: &["A simple pendulum consists of a heavy bob suspended by a light, \
                inextensible string from a fixed point. When displaced slightly, it oscillates \
                back and forth in simple harmonic motion (SHM). The time period of oscillation \
                is T = 2π √(L/g), which depends only on the length of the string (L) and \
                gravitational acceleration (g). The mass of the bob does not affect the period. \
                The small-angle approximation (θ ≤ 10°) is assumed for the formula to hold \
                accurately. Increasing the length increases the period, while reducing length \
                makes oscillations faster. Real-world examples include pendulum clocks and \
                swings in playgrounds."],
        },
        Section {
            heading: "Lens Simulation",
            paragraphs: &["A convex lens converges light rays, while a concave lens diverges \
                them. The relation between object distance (u), image distance (v), and focal \
                length (f) is given by the thin lens formula: 1/f = 1/v + 1/u. Magnification is \
                given by M = v/u. If the object is placed beyond 2f, the image is real, \
                inverted, and diminished. At 2f, the image is real, inverted, and same size. \
                Between f and 2f, the image is real, inverted, and magnified. At f, the image \
                is at infinity. Inside the focal length, a virtual, erect, and magnified image \
                is formed. Applications include microscopes, cameras, magnifying glasses, and \
                telescopes."],
        },
        Section {
            heading: "Wave Simulation",
            paragraphs: &["A wave is a disturbance that transfers energy from one point to \
                another without the transport of matter. Waves can be mechanical (sound, water) \
                or electromagnetic (light, radio). Key properties include wavelength (λ), \
                frequency (f), amplitude (A), and speed (v). The relation is v = fλ, and the \
                period is T = 1/f. Amplitude controls the height of the wave, while frequency \
                and speed determine how fast it oscillates. Crests are the highest points and \
                troughs are the lowest. In nature, waves explain ocean tides, sound vibrations, \
                and even seismic activity during earthquakes."],
        },
        Section {
            heading: "Spring-Mass Oscillator",
            paragraphs: &["A spring-mass system consists of a mass attached to a spring that \
                follows Hooke's law: F = -kx, where k is the spring constant. Displacing the mass \
                and releasing it produces simple harmonic motion (SHM). The frequency of \
                oscillation is given by f = (1 / 2π) √(k/m), and the time period is T = 1/f. A \
                stiffer spring (larger k) increases frequency, while a heavier mass (larger m) \
                decreases it. The system is used in shock absorbers, car suspensions, and \
                vibration isolation devices. Energy oscillates between potential energy in the \
                spring and kinetic energy of the moving mass, demonstrating conservation of \
                energy in oscillatory systems."],
        },
    ],
};

pub static HELP: Page = Page {
    title: "Help & User Guide",
    subtitle: "Follow this guide to use the Virtual Physics Lab experiments correctly.",
    sections: &[
        Section {
            heading: "1. Getting Started",
            paragraphs: &["Navigate to the Home page and choose an experiment card (Projectile, \
                Pendulum, Lens, Wave, Spring-Mass). Each experiment opens in an interactive 3D \
                view."],
        },
        Section {
            heading: "2. Controls",
            paragraphs: &["Use the sliders of each experiment to adjust variables like \
                velocity, angle, length, focal length, wave speed, or spring constant. The 3D \
                scene will update instantly to show the effect of your changes."],
        },
        Section {
            heading: "3. Camera & Navigation",
            paragraphs: &["Drag with your mouse (or one finger) to rotate the 3D view. Use \
                your mouse wheel to zoom in/out."],
        },
        Section {
            heading: "4. Formulas & Explanations",
            paragraphs: &["Below each experiment, you will find the key formulas used in the \
                simulation. Click \"Show Explanation\" to read detailed theory about the \
                experiment."],
        },
        Section {
            heading: "5. Q&A and Theory",
            paragraphs: &["Use the Q&A page to review common questions and answers. The Theory \
                page provides deeper explanations and real-life examples for each experiment."],
        },
        Section {
            heading: "6. Quiz",
            paragraphs: &["Use the Quiz page to test yourself on the experiments."],
        },
        Section {
            heading: "7. Certificate",
            paragraphs: &["After completing the quiz and experiments you can print a \
                certificate from the Certificate page."],
        },
        Section {
            heading: "8. Tips",
            paragraphs: &[
                "Use smaller steps on sliders for precise adjustments.",
                "Reset values by dragging sliders back to default positions.",
                "For the best experience, view on desktop or laptop (Chrome/Edge/Firefox).",
            ],
        },
    ],
};

pub static ABOUT: Page = Page {
    title: "About Us",
    subtitle: "Welcome to the Virtual Physics Lab project! This platform is designed to help \
        students explore and understand physics concepts through interactive 3D simulations.",
    sections: &[
        Section {
            heading: "Institution",
            paragraphs: &["East Point College of Higher Education, Bangalore"],
        },
        Section {
            heading: "Our Mission",
            paragraphs: &["To make physics learning more engaging and accessible through \
                immersive virtual experiments. Our goal is to empower students to visualize, \
                interact, and learn core scientific concepts beyond traditional classrooms."],
        },
        Section {
            heading: "Future Vision",
            paragraphs: &["We aim to integrate AI tutors, VR/AR technologies, and advanced data \
                analytics to create a next-generation educational platform that adapts to each \
                student's learning pace and style."],
        },
    ],
};
