//! The scene language's reserved words.
//!
//! The table is fixed at compile time. Order follows the language
//! reference word list and is the order completion lists show.
//! Spellings are unique, so lookups never have to break ties.
//!
//! Editing tools also classify keywords: shapes and visual attribute
//! blocks on one side, directives that only follow `#` on the other.

use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use rustc_hash::FxHashMap;

macro_rules! keywords {
    ($($variant:ident => $spelling:literal,)*) => {
        /// A reserved word of the scene language.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Keyword {
            $(
                #[doc = concat!("`", $spelling, "`")]
                $variant,
            )*
        }

        impl Keyword {
            /// The whole table, in its stable order.
            pub const ALL: &'static [Keyword] = &[$(Keyword::$variant,)*];

            /// Bare spelling, without any `#` prefix.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Keyword::$variant => $spelling,)*
                }
            }
        }
    };
}

keywords! {
    AaLevel => "aa_level",
    AaThreshold => "aa_threshold",
    Abs => "abs",
    Absorption => "absorption",
    Accuracy => "accuracy",
    Acos => "acos",
    Acosh => "acosh",
    Adaptive => "adaptive",
    AdcBailout => "adc_bailout",
    Agate => "agate",
    AgateTurb => "agate_turb",
    All => "all",
    AllIntersections => "all_intersections",
    Alpha => "alpha",
    Altitude => "altitude",
    AlwaysSample => "always_sample",
    Ambient => "ambient",
    AmbientLight => "ambient_light",
    Angle => "angle",
    Aperture => "aperture",
    Append => "append",
    ArcAngle => "arc_angle",
    AreaLight => "area_light",
    Array => "array",
    Asc => "asc",
    Ascii => "ascii",
    Asin => "asin",
    Asinh => "asinh",
    AssumedGamma => "assumed_gamma",
    Atan => "atan",
    Atan2 => "atan2",
    Atanh => "atanh",
    Autostop => "autostop",
    Average => "average",
    BSpline => "b_spline",
    Background => "background",
    BezierSpline => "bezier_spline",
    BicubicPatch => "bicubic_patch",
    BlackHole => "black_hole",
    Blob => "blob",
    Blue => "blue",
    BlurSamples => "blur_samples",
    BoundedBy => "bounded_by",
    Box => "box",
    Boxed => "boxed",
    Bozo => "bozo",
    Break => "break",
    Brick => "brick",
    BrickSize => "brick_size",
    Brightness => "brightness",
    Brilliance => "brilliance",
    BumpMap => "bump_map",
    BumpSize => "bump_size",
    Bumps => "bumps",
    Camera => "camera",
    Case => "case",
    Caustics => "caustics",
    Ceil => "ceil",
    Cells => "cells",
    Charset => "charset",
    Checker => "checker",
    Chr => "chr",
    Circular => "circular",
    ClippedBy => "clipped_by",
    Clock => "clock",
    ClockDelta => "clock_delta",
    ClockOn => "clock_on",
    Collect => "collect",
    Color => "color",
    ColorMap => "color_map",
    Colour => "colour",
    ColourMap => "colour_map",
    Component => "component",
    Composite => "composite",
    Concat => "concat",
    Cone => "cone",
    Confidence => "confidence",
    ConicSweep => "conic_sweep",
    ConserveEnergy => "conserve_energy",
    ContainedBy => "contained_by",
    Control0 => "control0",
    Control1 => "control1",
    Coords => "coords",
    Cos => "cos",
    Cosh => "cosh",
    Count => "count",
    Crackle => "crackle",
    Crand => "crand",
    Cube => "cube",
    Cubic => "cubic",
    CubicSpline => "cubic_spline",
    CubicWave => "cubic_wave",
    CutawayTextures => "cutaway_textures",
    Cylinder => "cylinder",
    Cylindrical => "cylindrical",
    Debug => "debug",
    Declare => "declare",
    Default => "default",
    Defined => "defined",
    Degrees => "degrees",
    Density => "density",
    DensityFile => "density_file",
    DensityMap => "density_map",
    Dents => "dents",
    Df3 => "df3",
    Difference => "difference",
    Diffuse => "diffuse",
    DimensionSize => "dimension_size",
    Dimensions => "dimensions",
    Direction => "direction",
    Disc => "disc",
    Dispersion => "dispersion",
    DispersionSamples => "dispersion_samples",
    DistExp => "dist_exp",
    Distance => "distance",
    Div => "div",
    DoubleIlluminate => "double_illuminate",
    Eccentricity => "eccentricity",
    Else => "else",
    Emission => "emission",
    End => "end",
    Error => "error",
    ErrorBound => "error_bound",
    Evaluate => "evaluate",
    Exp => "exp",
    ExpandThresholds => "expand_thresholds",
    Exponent => "exponent",
    Exterior => "exterior",
    Extinction => "extinction",
    FaceIndices => "face_indices",
    Facets => "facets",
    FadeColor => "fade_color",
    FadeColour => "fade_colour",
    FadeDistance => "fade_distance",
    FadePower => "fade_power",
    Falloff => "falloff",
    FalloffAngle => "falloff_angle",
    False => "false",
    Fclose => "fclose",
    FileExists => "file_exists",
    Filter => "filter",
    FinalClock => "final_clock",
    FinalFrame => "final_frame",
    Finish => "finish",
    Fisheye => "fisheye",
    Flatness => "flatness",
    Flip => "flip",
    Floor => "floor",
    FocalPoint => "focal_point",
    Fog => "fog",
    FogAlt => "fog_alt",
    FogOffset => "fog_offset",
    FogType => "fog_type",
    Fopen => "fopen",
    Form => "form",
    FrameNumber => "frame_number",
    Frequency => "frequency",
    Fresnel => "fresnel",
    Function => "function",
    Gather => "gather",
    Gif => "gif",
    GlobalLights => "global_lights",
    GlobalSettings => "global_settings",
    Gradient => "gradient",
    Granite => "granite",
    Gray => "gray",
    GrayThreshold => "gray_threshold",
    Green => "green",
    HeightField => "height_field",
    Hexagon => "hexagon",
    HfGray16 => "hf_gray_16",
    Hierarchy => "hierarchy",
    Hypercomplex => "hypercomplex",
    Hollow => "hollow",
    If => "if",
    Ifdef => "ifdef",
    Iff => "iff",
    Ifndef => "ifndef",
    ImageHeight => "image_height",
    ImageMap => "image_map",
    ImagePattern => "image_pattern",
    ImageWidth => "image_width",
    Include => "include",
    InitialClock => "initial_clock",
    InitialFrame => "initial_frame",
    Inside => "inside",
    InsideVector => "inside_vector",
    Int => "int",
    Interior => "interior",
    InteriorTexture => "interior_texture",
    Internal => "internal",
    Interpolate => "interpolate",
    Intersection => "intersection",
    Intervals => "intervals",
    Inverse => "inverse",
    Ior => "ior",
    Irid => "irid",
    IridWavelength => "irid_wavelength",
    Isosurface => "isosurface",
    Jitter => "jitter",
    Jpeg => "jpeg",
    Julia => "julia",
    JuliaFractal => "julia_fractal",
    Lambda => "lambda",
    Lathe => "lathe",
    Leopard => "leopard",
    LightGroup => "light_group",
    LightSource => "light_source",
    LinearSpline => "linear_spline",
    LinearSweep => "linear_sweep",
    Ln => "ln",
    LoadFile => "load_file",
    Local => "local",
    Location => "location",
    Log => "log",
    LookAt => "look_at",
    LooksLike => "looks_like",
    LowErrorFactor => "low_error_factor",
    Macro => "macro",
    Magnet => "magnet",
    MajorRadius => "major_radius",
    Mandel => "mandel",
    MapType => "map_type",
    Marble => "marble",
    Material => "material",
    MaterialMap => "material_map",
    Matrix => "matrix",
    Max => "max",
    MaxExtent => "max_extent",
    MaxGradient => "max_gradient",
    MaxIntersections => "max_intersections",
    MaxIteration => "max_iteration",
    MaxSample => "max_sample",
    MaxTrace => "max_trace",
    MaxTraceLevel => "max_trace_level",
    Media => "media",
    MediaAttenuation => "media_attenuation",
    MediaInteraction => "media_interaction",
    Merge => "merge",
    Mesh => "mesh",
    Mesh2 => "mesh2",
    Metallic => "metallic",
    Method => "method",
    Metric => "metric",
    Min => "min",
    MinExtent => "min_extent",
    MinimumReuse => "minimum_reuse",
    Mod => "mod",
    Mortar => "mortar",
    NaturalSpline => "natural_spline",
    NearestCount => "nearest_count",
    No => "no",
    NoBumpScale => "no_bump_scale",
    NoImage => "no_image",
    NoReflection => "no_reflection",
    NoShadow => "no_shadow",
    NoiseGenerator => "noise_generator",
    Normal => "normal",
    NormalIndices => "normal_indices",
    NormalMap => "normal_map",
    NormalVectors => "normal_vectors",
    NumberOfWaves => "number_of_waves",
    Object => "object",
    Octaves => "octaves",
    Off => "off",
    Offset => "offset",
    Omega => "omega",
    Omnimax => "omnimax",
    On => "on",
    Once => "once",
    Onion => "onion",
    Open => "open",
    Orient => "orient",
    Orientation => "orientation",
    Orthographic => "orthographic",
    Panoramic => "panoramic",
    Parallel => "parallel",
    Parametric => "parametric",
    PassThrough => "pass_through",
    Pattern => "pattern",
    Perspective => "perspective",
    Pgm => "pgm",
    Phase => "phase",
    Phong => "phong",
    PhongSize => "phong_size",
    Photons => "photons",
    Pi => "pi",
    Pigment => "pigment",
    PigmentMap => "pigment_map",
    PigmentPattern => "pigment_pattern",
    Planar => "planar",
    Plane => "plane",
    Png => "png",
    PointAt => "point_at",
    Poly => "poly",
    PolyWave => "poly_wave",
    Polygon => "polygon",
    Pot => "pot",
    Pow => "pow",
    Ppm => "ppm",
    Precision => "precision",
    Precompute => "precompute",
    PretraceEnd => "pretrace_end",
    PretraceStart => "pretrace_start",
    Prism => "prism",
    Prod => "prod",
    ProjectedThrough => "projected_through",
    Pwr => "pwr",
    QuadraticSpline => "quadratic_spline",
    Quadric => "quadric",
    Quartic => "quartic",
    Quaternion => "quaternion",
    QuickColor => "quick_color",
    QuickColour => "quick_colour",
    Quilted => "quilted",
    Radial => "radial",
    Radians => "radians",
    Radiosity => "radiosity",
    Radius => "radius",
    Rainbow => "rainbow",
    RampWave => "ramp_wave",
    Rand => "rand",
    Range => "range",
    Ratio => "ratio",
    Read => "read",
    Reciprocal => "reciprocal",
    RecursionLimit => "recursion_limit",
    Red => "red",
    Reflection => "reflection",
    ReflectionExponent => "reflection_exponent",
    Refraction => "refraction",
    Render => "render",
    Repeat => "repeat",
    Rgb => "rgb",
    Rgbf => "rgbf",
    Rgbft => "rgbft",
    Rgbt => "rgbt",
    Right => "right",
    Ripples => "ripples",
    Rotate => "rotate",
    Roughness => "roughness",
    Samples => "samples",
    SaveFile => "save_file",
    Scale => "scale",
    ScallopWave => "scallop_wave",
    Scattering => "scattering",
    Seed => "seed",
    Select => "select",
    Shadowless => "shadowless",
    Sin => "sin",
    SineWave => "sine_wave",
    Sinh => "sinh",
    Size => "size",
    Sky => "sky",
    SkySphere => "sky_sphere",
    Slice => "slice",
    Slope => "slope",
    SlopeMap => "slope_map",
    Smooth => "smooth",
    SmoothTriangle => "smooth_triangle",
    Solid => "solid",
    Sor => "sor",
    Spacing => "spacing",
    Specular => "specular",
    Sphere => "sphere",
    SphereSweep => "sphere_sweep",
    Spherical => "spherical",
    Spiral1 => "spiral1",
    Spiral2 => "spiral2",
    Spline => "spline",
    SplitUnion => "split_union",
    Spotlight => "spotlight",
    Spotted => "spotted",
    Sqr => "sqr",
    Sqrt => "sqrt",
    Statistics => "statistics",
    Str => "str",
    Strcmp => "strcmp",
    Strength => "strength",
    Strlen => "strlen",
    Strlwr => "strlwr",
    Strupr => "strupr",
    Sturm => "sturm",
    Substr => "substr",
    Sum => "sum",
    Superellipsoid => "superellipsoid",
    Switch => "switch",
    Sys => "sys",
    Tan => "tan",
    Tanh => "tanh",
    Target => "target",
    Text => "text",
    Texture => "texture",
    TextureList => "texture_list",
    TextureMap => "texture_map",
    Tga => "tga",
    Thickness => "thickness",
    Threshold => "threshold",
    Tiff => "tiff",
    Tightness => "tightness",
    Tile2 => "tile2",
    Tiles => "tiles",
    Tolerance => "tolerance",
    Toroidal => "toroidal",
    Torus => "torus",
    Trace => "trace",
    Transform => "transform",
    Translate => "translate",
    Transmit => "transmit",
    Triangle => "triangle",
    TriangleWave => "triangle_wave",
    True => "true",
    Ttf => "ttf",
    TurbDepth => "turb_depth",
    Turbulence => "turbulence",
    Type => "type",
    USteps => "u_steps",
    UltraWideAngle => "ultra_wide_angle",
    Undef => "undef",
    Union => "union",
    Up => "up",
    UseAlpha => "use_alpha",
    UseColor => "use_color",
    UseColour => "use_colour",
    UseIndex => "use_index",
    Utf8 => "utf8",
    UvIndices => "uv_indices",
    UvMapping => "uv_mapping",
    UvVectors => "uv_vectors",
    VSteps => "v_steps",
    Val => "val",
    Variance => "variance",
    VaxisRotate => "vaxis_rotate",
    Vcross => "vcross",
    Vdot => "vdot",
    Version => "version",
    VertexVectors => "vertex_vectors",
    Vlength => "vlength",
    Vnormalize => "vnormalize",
    Vrotate => "vrotate",
    Vstr => "vstr",
    Vturbulence => "vturbulence",
    Warning => "warning",
    Warp => "warp",
    WaterLevel => "water_level",
    Waves => "waves",
    While => "while",
    Width => "width",
    Wood => "wood",
    Wrinkles => "wrinkles",
    Write => "write",
}

lazy_static! {
    static ref KEYWORD_INDEX: FxHashMap<&'static str, Keyword> =
        Keyword::ALL.iter().map(|&k| (k.as_str(), k)).collect();
}

impl Keyword {
    /// Find the keyword spelled exactly like `text`.
    ///
    /// Leading and trailing spaces and control characters (anything up to
    /// U+0020) are ignored; case is not. Other Unicode spaces are kept.
    ///
    /// ```
    /// use povc_lex::Keyword;
    ///
    /// assert_eq!(Keyword::lookup("sphere"), Some(Keyword::Sphere));
    /// assert_eq!(Keyword::lookup(" declare\n"), Some(Keyword::Declare));
    /// assert_eq!(Keyword::lookup("\u{1}box\u{0}"), Some(Keyword::Box));
    /// assert_eq!(Keyword::lookup("Sphere"), None);
    /// assert_eq!(Keyword::lookup("my_sphere"), None);
    /// ```
    pub fn lookup(text: &str) -> Option<Keyword> {
        KEYWORD_INDEX.get(text.trim_matches(|c: char| c <= ' ')).copied()
    }

    /// Returns true for keywords that open a surface-appearance block.
    pub const fn is_visual_attribute(self) -> bool {
        matches!(
            self,
            Keyword::Texture | Keyword::Pigment | Keyword::Finish | Keyword::Interior
        )
    }

    /// Returns true for keywords that declare a geometric primitive.
    pub const fn is_shape(self) -> bool {
        matches!(
            self,
            Keyword::Sphere
                | Keyword::SphereSweep
                | Keyword::Box
                | Keyword::JuliaFractal
                | Keyword::Plane
                | Keyword::Lathe
                | Keyword::BicubicPatch
                | Keyword::Mesh
                | Keyword::Prism
                | Keyword::Cube
                | Keyword::Blob
                | Keyword::ConicSweep
                | Keyword::Polygon
        )
    }

    /// Returns true for the control and declaration directives that are
    /// only meaningful immediately after `#`.
    ///
    /// ```
    /// use povc_lex::Keyword;
    ///
    /// assert!(Keyword::Declare.occurs_after_directive_prefix());
    /// assert!(!Keyword::Sphere.occurs_after_directive_prefix());
    /// ```
    pub const fn occurs_after_directive_prefix(self) -> bool {
        matches!(
            self,
            Keyword::End
                | Keyword::If
                | Keyword::While
                | Keyword::Declare
                | Keyword::Macro
                | Keyword::Local
                | Keyword::Ifdef
                | Keyword::Ifndef
                | Keyword::Switch
                | Keyword::Default
        )
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a string that is not a keyword.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownKeyword(pub String);

impl fmt::Display for UnknownKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "not a keyword: {:?}", self.0)
    }
}

impl std::error::Error for UnknownKeyword {}

impl FromStr for Keyword {
    type Err = UnknownKeyword;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Keyword::lookup(s).ok_or_else(|| UnknownKeyword(s.to_string()))
    }
}
