mod blending_properties;
